use actix_web::{get, put, web, HttpResponse};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    profile::application::{
        domain::{PortfolioProfile, ProfileDetails, ProfileUpdate},
        ports::incoming::use_cases::UpdateProfileError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Get the public portfolio profile
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "profile",
    responses(
        (status = 200, description = "Profile with embedded education and skills", body = PortfolioProfile),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => {
            error!("Failed to load portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Update profile details
///
/// Only the fields present in the body change.
#[utoipa::path(
    put,
    path = "/api/portfolio",
    tag = "profile",
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Updated details", body = ProfileDetails),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/portfolio")]
pub async fn update_portfolio_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<ProfileUpdate>,
) -> HttpResponse {
    match data.profile.update.execute(payload.into_inner()).await {
        Ok(details) => ApiResponse::success(details),
        Err(UpdateProfileError::Invalid(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateProfileError::RepositoryError(msg)) => {
            error!("Failed to update portfolio: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Get the owner's contact channels
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "profile",
    responses(
        (status = 200, description = "Channel name to value, e.g. `email`, `github`", body = Object),
    )
)]
#[get("/api/contact")]
pub async fn get_contact_details_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.profile.get.details().await {
        Ok(details) => ApiResponse::success(details.map(|d| d.contact).unwrap_or_default()),
        Err(e) => {
            error!("Failed to load contact details: {}", e);
            ApiResponse::internal_error()
        }
    }
}
