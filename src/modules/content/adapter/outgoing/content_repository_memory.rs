use async_trait::async_trait;

use crate::content::application::{
    domain::{ContentResource, Record},
    ports::outgoing::{ContentRepository, ContentRepositoryError},
};
use crate::shared::store::MemoryTable;

/// Process-local storage for one collection.
pub struct InMemoryContentRepository<T> {
    table: MemoryTable<Record<T>>,
}

impl<T> Clone for InMemoryContentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T> Default for InMemoryContentRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryContentRepository<T> {
    pub fn new() -> Self {
        Self {
            table: MemoryTable::new(),
        }
    }
}

#[async_trait]
impl<T: ContentResource> ContentRepository<T> for InMemoryContentRepository<T> {
    async fn list(&self) -> Result<Vec<Record<T>>, ContentRepositoryError> {
        Ok(self.table.all().await)
    }

    async fn insert(&self, fields: T) -> Result<Record<T>, ContentRepositoryError> {
        Ok(self.table.insert_with(|id| Record::new(id, fields)).await)
    }

    async fn update(&self, record: Record<T>) -> Result<Record<T>, ContentRepositoryError> {
        self.table
            .replace(record)
            .await
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), ContentRepositoryError> {
        self.table
            .remove(id)
            .await
            .map(|_| ())
            .ok_or(ContentRepositoryError::NotFound)
    }
}
