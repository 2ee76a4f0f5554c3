use reqwest::StatusCode;

/// Why a call to the portfolio API failed. Every variant names the resource.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Could not reach {resource}: {reason}")]
    Network { resource: String, reason: String },

    #[error("{resource} request failed with {status}{}", detail(.message))]
    Http {
        resource: String,
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Unexpected {resource} response: {reason}")]
    Decode { resource: String, reason: String },
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    pub fn resource(&self) -> &str {
        match self {
            ApiError::Network { resource, .. }
            | ApiError::Http { resource, .. }
            | ApiError::Decode { resource, .. } => resource,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `message` field of the server's error body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
