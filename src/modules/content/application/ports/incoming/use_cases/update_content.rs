use async_trait::async_trait;

use crate::content::application::domain::{ContentResource, ContentValidationError, Record};

/// Full replacement of a record's fields, addressed by its id.
#[derive(Debug, Clone)]
pub struct UpdateContentCommand<T> {
    record: Record<T>,
}

impl<T: ContentResource> UpdateContentCommand<T> {
    pub fn new(record: Record<T>) -> Result<Self, ContentValidationError> {
        record.fields.validate()?;
        Ok(Self { record })
    }

    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn into_record(self) -> Record<T> {
        self.record
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContentError {
    #[error("Record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateContentUseCase<T: ContentResource>: Send + Sync {
    async fn execute(&self, command: UpdateContentCommand<T>)
        -> Result<Record<T>, UpdateContentError>;
}
