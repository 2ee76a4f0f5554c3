pub mod contact_message_repository;
pub mod subscriber_repository;

pub use contact_message_repository::ContactMessageRepository;
pub use subscriber_repository::SubscriberRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum InboxRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Email already subscribed")]
    AlreadySubscribed,

    #[error("Storage error: {0}")]
    StorageError(String),
}
