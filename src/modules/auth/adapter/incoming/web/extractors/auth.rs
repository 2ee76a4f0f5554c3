use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// The administrator behind a valid `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl AdminUser {
    /// Checks the bearer token, yielding the ready-made error response on failure.
    pub fn from_http_request(req: &HttpRequest) -> Result<Self, HttpResponse> {
        let jwt_service = req
            .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .ok_or_else(ApiResponse::internal_error)?;

        let token = extract_token_from_header(req).ok_or_else(|| {
            ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            )
        })?;

        match jwt_service.verify_token(&token) {
            Ok(claims) => Ok(AdminUser { email: claims.sub }),
            Err(_) => Err(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )),
        }
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_http_request(req).map_err(create_api_error))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
