use async_trait::async_trait;

use crate::resume::application::domain::{ResumeInfo, UploadRejection};

/// A file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadResumeCommand {
    pub original_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadResumeError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait UploadResumeUseCase: Send + Sync {
    async fn execute(&self, command: UploadResumeCommand) -> Result<ResumeInfo, UploadResumeError>;

    /// Largest accepted file, so callers can stop reading early.
    fn max_file_size_bytes(&self) -> usize;
}
