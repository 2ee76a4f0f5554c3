use async_trait::async_trait;

use crate::profile::application::domain::{PortfolioProfile, ProfileDetails};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    /// Details with the education and skills collections embedded.
    async fn execute(&self) -> Result<PortfolioProfile, ProfileError>;

    /// Stored details, or `None` when nothing was saved yet.
    async fn details(&self) -> Result<Option<ProfileDetails>, ProfileError>;
}
