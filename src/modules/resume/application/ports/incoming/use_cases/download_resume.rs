use async_trait::async_trait;

use crate::resume::application::domain::ResumeFile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DownloadResumeError {
    #[error("Resume not available")]
    NotAvailable,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait DownloadResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumeFile, DownloadResumeError>;
}
