use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, MessageResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    content::adapter::incoming::web::routes::DeleteRecordRequest,
    inbox::application::{
        domain::{NewsletterSubscriber, SubscriptionRequest},
        ports::incoming::use_cases::{InboxError, SubscribeError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubscribeRequest {
    #[schema(example = "reader@example.com")]
    pub email: String,
}

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    path = "/api/newsletter",
    tag = "inbox",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed", body = NewsletterSubscriber),
        (status = 400, description = "Missing or malformed email", body = ErrorResponse),
        (
            status = 409,
            description = "Already subscribed",
            body = ErrorResponse,
            example = json!({
                "code": "ALREADY_SUBSCRIBED",
                "message": "Email already subscribed"
            })
        ),
    )
)]
#[post("/api/newsletter")]
pub async fn subscribe_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubscribeRequest>,
) -> HttpResponse {
    let request = match SubscriptionRequest::new(&payload.email) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.inbox.subscribe.execute(request).await {
        Ok(subscriber) => ApiResponse::created(subscriber),
        Err(SubscribeError::AlreadySubscribed) => {
            ApiResponse::conflict("ALREADY_SUBSCRIBED", "Email already subscribed")
        }
        Err(SubscribeError::RepositoryError(msg)) => {
            error!("Failed to subscribe: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// List newsletter subscribers
#[utoipa::path(
    get,
    path = "/api/newsletter",
    tag = "inbox",
    responses(
        (status = 200, description = "`{\"subscribers\": [...]}`", body = [NewsletterSubscriber]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/newsletter")]
pub async fn list_subscribers_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.inbox.list_subscribers.execute().await {
        Ok(subscribers) => ApiResponse::collection("subscribers", subscribers),
        Err(e) => {
            error!("Failed to list subscribers: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Remove a newsletter subscriber
#[utoipa::path(
    delete,
    path = "/api/newsletter",
    tag = "inbox",
    request_body = DeleteRecordRequest,
    responses(
        (status = 200, description = "Removed", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/newsletter")]
pub async fn unsubscribe_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<DeleteRecordRequest>,
) -> HttpResponse {
    let id = payload.id;

    match data.inbox.unsubscribe.execute(id).await {
        Ok(()) => ApiResponse::message(format!("Subscriber {} deleted successfully", id)),
        Err(InboxError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Subscriber not found"),
        Err(InboxError::RepositoryError(msg)) => {
            error!("Failed to delete subscriber {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
