// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Plain acknowledgement body, e.g. after a delete.
#[derive(Serialize, Clone, Debug)]
pub struct MessageBody {
    pub message: String,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    /// Wraps a list under its collection key: `{"<key>": [...]}`.
    pub fn collection<T: Serialize>(key: &str, items: Vec<T>) -> HttpResponse {
        let mut body = serde_json::Map::new();
        match serde_json::to_value(items) {
            Ok(list) => {
                body.insert(key.to_string(), list);
                HttpResponse::Ok().json(serde_json::Value::Object(body))
            }
            Err(e) => {
                tracing::error!("Failed to serialize {} collection: {}", key, e);
                Self::internal_error()
            }
        }
    }

    pub fn message(message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(MessageBody {
            message: message.into(),
        })
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            code: code.to_string(),
            message: message.to_string(),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn payload_too_large(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::PAYLOAD_TOO_LARGE, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
