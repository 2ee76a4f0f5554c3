use async_trait::async_trait;
use std::path::PathBuf;

use crate::content::application::{
    domain::{ContentResource, Record},
    ports::outgoing::{ContentRepository, ContentRepositoryError},
};
use crate::shared::store::{JsonFileTable, StoreError};

/// One collection persisted as `<data dir>/<resource>.json`.
pub struct JsonFileContentRepository<T> {
    table: JsonFileTable<Record<T>>,
}

impl<T> Clone for JsonFileContentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T: ContentResource> JsonFileContentRepository<T> {
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = data_dir.into().join(format!("{}.json", T::RESOURCE));
        Ok(Self {
            table: JsonFileTable::open(path).await?,
        })
    }
}

fn map_store_err(e: StoreError) -> ContentRepositoryError {
    ContentRepositoryError::StorageError(e.to_string())
}

#[async_trait]
impl<T: ContentResource> ContentRepository<T> for JsonFileContentRepository<T> {
    async fn list(&self) -> Result<Vec<Record<T>>, ContentRepositoryError> {
        Ok(self.table.all().await)
    }

    async fn insert(&self, fields: T) -> Result<Record<T>, ContentRepositoryError> {
        self.table
            .insert_with(|id| Record::new(id, fields))
            .await
            .map_err(map_store_err)
    }

    async fn update(&self, record: Record<T>) -> Result<Record<T>, ContentRepositoryError> {
        self.table
            .replace(record)
            .await
            .map_err(map_store_err)?
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), ContentRepositoryError> {
        self.table
            .remove(id)
            .await
            .map_err(map_store_err)?
            .map(|_| ())
            .ok_or(ContentRepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::{CertificationEntry, ServiceEntry, TagList};
    use crate::tests::support::scratch::ScratchDir;

    fn certification() -> CertificationEntry {
        CertificationEntry {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "March 2023".to_string(),
            credential_id: "CKA-2023-001".to_string(),
            expires: Some("March 2026".to_string()),
            url: None,
        }
    }

    #[tokio::test]
    async fn records_survive_a_restart() {
        // Arrange
        let dir = ScratchDir::new("content-restart");
        let repo = JsonFileContentRepository::open(dir.path()).await.unwrap();
        let created = repo.insert(certification()).await.unwrap();

        // Act
        let reopened: JsonFileContentRepository<CertificationEntry> =
            JsonFileContentRepository::open(dir.path()).await.unwrap();

        // Assert
        assert_eq!(reopened.list().await.unwrap(), vec![created]);
        assert!(dir.path().join("certifications.json").exists());
    }

    #[tokio::test]
    async fn each_collection_gets_its_own_file() {
        let dir = ScratchDir::new("content-files");
        let services = JsonFileContentRepository::open(dir.path()).await.unwrap();
        services
            .insert(ServiceEntry {
                title: "Consulting".to_string(),
                description: "Architecture reviews".to_string(),
                icon: "code".to_string(),
                features: TagList::new(["Audits"]),
            })
            .await
            .unwrap();

        let certifications: JsonFileContentRepository<CertificationEntry> =
            JsonFileContentRepository::open(dir.path()).await.unwrap();

        assert!(certifications.list().await.unwrap().is_empty());
        assert!(dir.path().join("services.json").exists());
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_ids_are_not_found() {
        let dir = ScratchDir::new("content-missing");
        let repo: JsonFileContentRepository<CertificationEntry> =
            JsonFileContentRepository::open(dir.path()).await.unwrap();

        let update = repo.update(Record::new(5, certification())).await;
        let delete = repo.delete(5).await;

        assert!(matches!(update, Err(ContentRepositoryError::NotFound)));
        assert!(matches!(delete, Err(ContentRepositoryError::NotFound)));
    }
}
