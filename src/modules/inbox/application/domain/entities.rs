use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::store::Identified;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InboxValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,
}

fn require(name: &'static str, value: &str) -> Result<String, InboxValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InboxValidationError::MissingField(name));
    }
    Ok(value.to_string())
}

fn require_email(value: &str) -> Result<String, InboxValidationError> {
    let email = require("email", value)?;
    if !EmailAddress::is_valid(&email) {
        return Err(InboxValidationError::InvalidEmail);
    }
    Ok(email)
}

// ========================= Contact =========================

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    /// Empty when the visitor left it out
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Identified for ContactMessage {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Validated contact-form input, before the server assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn new(
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<Self, InboxValidationError> {
        Ok(Self {
            name: require("name", name)?,
            email: require_email(email)?,
            subject: subject.map(str::trim).unwrap_or_default().to_string(),
            message: require("message", message)?,
        })
    }

    pub fn into_message(self, id: i64, created_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}

// ========================= Newsletter =========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewsletterSubscriber {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "reader@example.com")]
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

impl Identified for NewsletterSubscriber {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A subscription for a syntactically valid, lowercased address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    email: String,
}

impl SubscriptionRequest {
    pub fn new(email: &str) -> Result<Self, InboxValidationError> {
        Ok(Self {
            email: require_email(email)?.to_lowercase(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
