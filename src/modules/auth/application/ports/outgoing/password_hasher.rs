use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Produces and checks PHC strings such as the configured admin hash.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Used by the `hash-password` command to produce `ADMIN_PASSWORD_HASH`.
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password, `Err` for an unreadable hash.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
