// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "title is required")]
    pub message: String,
}

/// Acknowledgement body, e.g. after a delete
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Project 3 deleted successfully")]
    pub message: String,
}
