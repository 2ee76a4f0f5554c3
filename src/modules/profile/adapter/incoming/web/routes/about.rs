use actix_web::{get, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    profile::application::domain::ProfileUpdate,
    shared::api::ApiResponse,
    AppState,
};

/// Shown until the owner writes an about text.
pub const DEFAULT_ABOUT: &str = "Default about text";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AboutBody {
    #[schema(example = "I build web services.")]
    pub about: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AboutRequest {
    /// Omitted or null keeps the current text
    pub about: Option<String>,
}

/// Get the about text
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "profile",
    responses((status = 200, description = "About text", body = AboutBody))
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.profile.get.details().await {
        Ok(details) => ApiResponse::success(AboutBody {
            about: details
                .map(|d| d.about)
                .unwrap_or_else(|| DEFAULT_ABOUT.to_string()),
        }),
        Err(e) => {
            error!("Failed to load about text: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Replace the about text
#[utoipa::path(
    put,
    path = "/api/about",
    tag = "profile",
    request_body = AboutRequest,
    responses(
        (status = 200, description = "Stored about text", body = AboutBody),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/about")]
pub async fn update_about_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<AboutRequest>,
) -> HttpResponse {
    let update = ProfileUpdate {
        about: payload.into_inner().about,
        ..Default::default()
    };

    match data.profile.update.execute(update).await {
        Ok(details) => ApiResponse::success(AboutBody {
            about: details.about,
        }),
        Err(e) => {
            error!("Failed to update about text: {}", e);
            ApiResponse::internal_error()
        }
    }
}
