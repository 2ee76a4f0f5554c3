use async_trait::async_trait;

use crate::profile::application::domain::ProfileDetails;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// `None` until the profile is first saved.
    async fn get(&self) -> Result<Option<ProfileDetails>, ProfileRepositoryError>;

    async fn save(&self, details: ProfileDetails) -> Result<(), ProfileRepositoryError>;
}
