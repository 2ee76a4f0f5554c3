use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminAccount;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminDirectoryError {
    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}

/// Lookup of administrator accounts by normalized email.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str)
        -> Result<Option<AdminAccount>, AdminDirectoryError>;
}
