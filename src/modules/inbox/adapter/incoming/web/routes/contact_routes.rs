use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, MessageResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    content::adapter::incoming::web::routes::DeleteRecordRequest,
    inbox::application::{
        domain::{ContactMessage, ContactSubmission},
        ports::incoming::use_cases::InboxError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Contact form submitted by a visitor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "Project inquiry")]
    pub subject: Option<String>,
    #[schema(example = "I'd like to talk about a project.")]
    pub message: String,
}

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "inbox",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored", body = ContactMessage),
        (status = 400, description = "Missing field or malformed email", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> HttpResponse {
    let dto = payload.into_inner();
    let submission = match ContactSubmission::new(
        &dto.name,
        &dto.email,
        dto.subject.as_deref(),
        &dto.message,
    ) {
        Ok(submission) => submission,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.inbox.submit_contact.execute(submission).await {
        Ok(message) => ApiResponse::created(message),
        Err(e) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "/api/contact-messages",
    tag = "inbox",
    responses(
        (status = 200, description = "`{\"messages\": [...]}`", body = [ContactMessage]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/contact-messages")]
pub async fn list_contact_messages_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.inbox.list_messages.execute().await {
        Ok(messages) => ApiResponse::collection("messages", messages),
        Err(e) => {
            error!("Failed to list contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Delete a contact message
#[utoipa::path(
    delete,
    path = "/api/contact-messages",
    tag = "inbox",
    request_body = DeleteRecordRequest,
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/contact-messages")]
pub async fn delete_contact_message_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<DeleteRecordRequest>,
) -> HttpResponse {
    let id = payload.id;

    match data.inbox.delete_message.execute(id).await {
        Ok(()) => ApiResponse::message(format!("Message {} deleted successfully", id)),
        Err(InboxError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Message not found"),
        Err(InboxError::RepositoryError(msg)) => {
            error!("Failed to delete contact message {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
