use async_trait::async_trait;

use crate::content::application::domain::ContentResource;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContentError {
    #[error("Record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteContentUseCase<T: ContentResource>: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), DeleteContentError>;
}
