use async_trait::async_trait;

use crate::resume::application::domain::ResumeFile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeStoreError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn current(&self) -> Result<Option<ResumeFile>, ResumeStoreError>;

    /// Replaces whatever resume was stored before.
    async fn replace(&self, file: ResumeFile) -> Result<(), ResumeStoreError>;
}
