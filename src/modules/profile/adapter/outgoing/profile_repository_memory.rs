use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::profile::application::{
    domain::ProfileDetails,
    ports::outgoing::{ProfileRepository, ProfileRepositoryError},
};

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    details: Arc<RwLock<Option<ProfileDetails>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out with the given details already saved.
    pub fn seeded(details: ProfileDetails) -> Self {
        Self {
            details: Arc::new(RwLock::new(Some(details))),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self) -> Result<Option<ProfileDetails>, ProfileRepositoryError> {
        Ok(self.details.read().await.clone())
    }

    async fn save(&self, details: ProfileDetails) -> Result<(), ProfileRepositoryError> {
        *self.details.write().await = Some(details);
        Ok(())
    }
}
