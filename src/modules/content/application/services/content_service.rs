use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::info;

use crate::content::application::{
    domain::{ContentResource, Record},
    ports::{
        incoming::use_cases::{
            CreateContentCommand, CreateContentError, CreateContentUseCase, DeleteContentError,
            DeleteContentUseCase, ListContentError, ListContentUseCase, UpdateContentCommand,
            UpdateContentError, UpdateContentUseCase,
        },
        outgoing::{ContentRepository, ContentRepositoryError},
    },
};

/// Implements every content use case for one collection on top of its repository.
pub struct ContentService<T, R>
where
    T: ContentResource,
    R: ContentRepository<T>,
{
    repository: R,
    _resource: PhantomData<fn() -> T>,
}

impl<T, R> Clone for ContentService<T, R>
where
    T: ContentResource,
    R: ContentRepository<T> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}

impl<T, R> ContentService<T, R>
where
    T: ContentResource,
    R: ContentRepository<T>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R> ListContentUseCase<T> for ContentService<T, R>
where
    T: ContentResource,
    R: ContentRepository<T>,
{
    async fn execute(&self) -> Result<Vec<Record<T>>, ListContentError> {
        self.repository
            .list()
            .await
            .map_err(|e| ListContentError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<T, R> CreateContentUseCase<T> for ContentService<T, R>
where
    T: ContentResource,
    R: ContentRepository<T>,
{
    async fn execute(
        &self,
        command: CreateContentCommand<T>,
    ) -> Result<Record<T>, CreateContentError> {
        let record = self
            .repository
            .insert(command.into_fields())
            .await
            .map_err(|e| CreateContentError::RepositoryError(e.to_string()))?;

        info!("{} {} created", T::LABEL, record.id);
        Ok(record)
    }
}

#[async_trait]
impl<T, R> UpdateContentUseCase<T> for ContentService<T, R>
where
    T: ContentResource,
    R: ContentRepository<T>,
{
    async fn execute(
        &self,
        command: UpdateContentCommand<T>,
    ) -> Result<Record<T>, UpdateContentError> {
        let record = self
            .repository
            .update(command.into_record())
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => UpdateContentError::NotFound,
                other => UpdateContentError::RepositoryError(other.to_string()),
            })?;

        info!("{} {} updated", T::LABEL, record.id);
        Ok(record)
    }
}

#[async_trait]
impl<T, R> DeleteContentUseCase<T> for ContentService<T, R>
where
    T: ContentResource,
    R: ContentRepository<T>,
{
    async fn execute(&self, id: i64) -> Result<(), DeleteContentError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ContentRepositoryError::NotFound => DeleteContentError::NotFound,
            other => DeleteContentError::RepositoryError(other.to_string()),
        })?;

        info!("{} {} deleted", T::LABEL, id);
        Ok(())
    }
}
