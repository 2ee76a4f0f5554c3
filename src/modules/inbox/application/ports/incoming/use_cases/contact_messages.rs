use async_trait::async_trait;

use crate::inbox::application::domain::{ContactMessage, ContactSubmission};

/// Failure shared by the inbox read/delete use cases.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InboxError {
    #[error("Not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, submission: ContactSubmission) -> Result<ContactMessage, InboxError>;
}

#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessage>, InboxError>;
}

#[async_trait]
pub trait DeleteContactMessageUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), InboxError>;
}
