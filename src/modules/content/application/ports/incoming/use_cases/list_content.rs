use async_trait::async_trait;

use crate::content::application::domain::{ContentResource, Record};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContentError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListContentUseCase<T: ContentResource>: Send + Sync {
    async fn execute(&self) -> Result<Vec<Record<T>>, ListContentError>;
}
