use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::profile::application::{
    domain::ProfileDetails,
    ports::outgoing::{ProfileRepository, ProfileRepositoryError},
};
use crate::shared::store::{load_json, save_json, StoreError};

pub const PROFILE_FILE: &str = "profile.json";

/// The profile document at `<data dir>/profile.json`, cached in memory.
#[derive(Clone)]
pub struct JsonFileProfileRepository {
    path: Arc<PathBuf>,
    details: Arc<RwLock<Option<ProfileDetails>>>,
}

impl JsonFileProfileRepository {
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = data_dir.into().join(PROFILE_FILE);
        let details = load_json(&path).await?;
        Ok(Self {
            path: Arc::new(path),
            details: Arc::new(RwLock::new(details)),
        })
    }
}

#[async_trait]
impl ProfileRepository for JsonFileProfileRepository {
    async fn get(&self) -> Result<Option<ProfileDetails>, ProfileRepositoryError> {
        Ok(self.details.read().await.clone())
    }

    async fn save(&self, details: ProfileDetails) -> Result<(), ProfileRepositoryError> {
        let mut current = self.details.write().await;
        save_json(&self.path, &details)
            .await
            .map_err(|e| ProfileRepositoryError::StorageError(e.to_string()))?;
        *current = Some(details);
        Ok(())
    }
}
