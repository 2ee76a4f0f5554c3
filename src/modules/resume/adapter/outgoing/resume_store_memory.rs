use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::resume::application::{
    domain::ResumeFile,
    ports::outgoing::{ResumeStore, ResumeStoreError},
};

/// Holds the current resume in process memory.
#[derive(Clone, Default)]
pub struct InMemoryResumeStore {
    current: Arc<RwLock<Option<ResumeFile>>>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn current(&self) -> Result<Option<ResumeFile>, ResumeStoreError> {
        Ok(self.current.read().await.clone())
    }

    async fn replace(&self, file: ResumeFile) -> Result<(), ResumeStoreError> {
        *self.current.write().await = Some(file);
        Ok(())
    }
}
