use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{AdminDirectory, PasswordHasher, TokenProvider};

// ========================= Login Request =========================
/// Validated login request
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    /// Lowercased email
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Directory error: {0}")]
    DirectoryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResponse {
    pub token: String,
    pub email: String,
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminService<D>
where
    D: AdminDirectory,
{
    directory: D,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<D> LoginAdminService<D>
where
    D: AdminDirectory,
{
    pub fn new(
        directory: D,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            directory,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<D> LoginAdminUseCase for LoginAdminService<D>
where
    D: AdminDirectory,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        // 1️⃣ Find the account (email is already normalized)
        let account = self
            .directory
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::DirectoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // 2️⃣ Verify password
        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &account.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // 3️⃣ Issue token
        let token = self
            .token_provider
            .generate_access_token(&account.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            token,
            email: account.email,
        })
    }
}
