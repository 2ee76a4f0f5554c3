use async_trait::async_trait;

use crate::content::application::domain::{ContentResource, Record};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ContentRepository<T: ContentResource>: Send + Sync {
    /// Records in insertion order.
    async fn list(&self) -> Result<Vec<Record<T>>, ContentRepositoryError>;

    /// Stores the fields under a fresh id.
    async fn insert(&self, fields: T) -> Result<Record<T>, ContentRepositoryError>;

    /// Replaces all fields of an existing record.
    async fn update(&self, record: Record<T>) -> Result<Record<T>, ContentRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), ContentRepositoryError>;
}
