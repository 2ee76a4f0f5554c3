use async_trait::async_trait;

use crate::profile::application::domain::{ProfileDetails, ProfileUpdate, ProfileValidationError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error(transparent)]
    Invalid(#[from] ProfileValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    /// Merges the update into the stored details, creating them on first use.
    async fn execute(&self, update: ProfileUpdate) -> Result<ProfileDetails, UpdateProfileError>;
}
