use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};
use crate::auth::application::use_cases::login_admin::{
    LoginAdminResponse, LoginAdminUseCase, LoginError, LoginRequest,
};
use crate::content::application::{
    domain::{ContentResource, Record},
    ports::outgoing::{ContentRepository, ContentRepositoryError},
};
use crate::email::application::ports::outgoing::{InboxEmailNotifier, InboxNotificationError};
use crate::inbox::application::domain::{ContactMessage, NewsletterSubscriber};

// ──────────────────────────────────────────────────────────
// Token provider
// ──────────────────────────────────────────────────────────

/// Accepts or rejects every token without looking at it.
#[derive(Clone)]
pub struct StubTokenProvider {
    accept: bool,
}

impl StubTokenProvider {
    pub const ADMIN_EMAIL: &'static str = "admin@example.com";

    pub fn accepting() -> Self {
        Self { accept: true }
    }

    pub fn rejecting() -> Self {
        Self { accept: false }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _subject: &str) -> Result<String, TokenError> {
        Ok("test-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        if !self.accept {
            return Err(TokenError::InvalidSignature);
        }

        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: Self::ADMIN_EMAIL.to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}

// ──────────────────────────────────────────────────────────
// Login
// ──────────────────────────────────────────────────────────

/// Rejects every login; handlers under test that need a login swap in their own.
#[derive(Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

// ──────────────────────────────────────────────────────────
// Content
// ──────────────────────────────────────────────────────────

/// Every call fails with a storage error.
#[derive(Clone)]
pub struct FailingContentRepository;

#[async_trait]
impl<T: ContentResource> ContentRepository<T> for FailingContentRepository {
    async fn list(&self) -> Result<Vec<Record<T>>, ContentRepositoryError> {
        Err(ContentRepositoryError::StorageError("storage offline".to_string()))
    }

    async fn insert(&self, _fields: T) -> Result<Record<T>, ContentRepositoryError> {
        Err(ContentRepositoryError::StorageError("storage offline".to_string()))
    }

    async fn update(&self, _record: Record<T>) -> Result<Record<T>, ContentRepositoryError> {
        Err(ContentRepositoryError::StorageError("storage offline".to_string()))
    }

    async fn delete(&self, _id: i64) -> Result<(), ContentRepositoryError> {
        Err(ContentRepositoryError::StorageError("storage offline".to_string()))
    }
}

// ──────────────────────────────────────────────────────────
// Inbox notifications
// ──────────────────────────────────────────────────────────

/// Remembers who would have been emailed. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingInboxNotifier {
    acknowledged: Arc<Mutex<Vec<String>>>,
    confirmed: Arc<Mutex<Vec<String>>>,
}

impl RecordingInboxNotifier {
    pub fn acknowledged(&self) -> Vec<String> {
        self.acknowledged.lock().unwrap().clone()
    }

    pub fn confirmed(&self) -> Vec<String> {
        self.confirmed.lock().unwrap().clone()
    }
}

#[async_trait]
impl InboxEmailNotifier for RecordingInboxNotifier {
    async fn send_contact_acknowledgement(
        &self,
        message: &ContactMessage,
    ) -> Result<(), InboxNotificationError> {
        self.acknowledged.lock().unwrap().push(message.email.clone());
        Ok(())
    }

    async fn send_subscription_confirmation(
        &self,
        subscriber: &NewsletterSubscriber,
    ) -> Result<(), InboxNotificationError> {
        self.confirmed.lock().unwrap().push(subscriber.email.clone());
        Ok(())
    }
}

pub struct FailingInboxNotifier;

#[async_trait]
impl InboxEmailNotifier for FailingInboxNotifier {
    async fn send_contact_acknowledgement(
        &self,
        _message: &ContactMessage,
    ) -> Result<(), InboxNotificationError> {
        Err(InboxNotificationError::EmailSendingFailed(
            "smtp down".to_string(),
        ))
    }

    async fn send_subscription_confirmation(
        &self,
        _subscriber: &NewsletterSubscriber,
    ) -> Result<(), InboxNotificationError> {
        Err(InboxNotificationError::EmailSendingFailed(
            "smtp down".to_string(),
        ))
    }
}
