use async_trait::async_trait;

use super::InboxRepositoryError;
use crate::inbox::application::domain::{ContactMessage, ContactSubmission};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Stores the submission, assigning id and `created_at`.
    async fn insert(&self, submission: ContactSubmission)
        -> Result<ContactMessage, InboxRepositoryError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, InboxRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), InboxRepositoryError>;
}
