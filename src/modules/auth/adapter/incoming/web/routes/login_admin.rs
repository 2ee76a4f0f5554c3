use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    message: String,

    /// Bearer token for the admin endpoints
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    #[schema(example = "admin@example.com")]
    email: String,
}

/// Admin login
///
/// Verifies the configured admin credentials and returns a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed email or empty password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "code": "INVALID_CREDENTIALS",
                "message": "Invalid email or password"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin.execute(request).await {
        Ok(response) => {
            info!(email = %response.email, "Admin logged in successfully");

            ApiResponse::success(LoginResponse {
                message: "Login successful".to_string(),
                token: response.token,
                email: response.email,
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(ref e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    use crate::auth::application::use_cases::login_admin::{
        LoginAdminResponse, LoginAdminUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockLoginAdminUseCase {
        result: Result<LoginAdminResponse, LoginError>,
    }

    #[async_trait]
    impl LoginAdminUseCase for MockLoginAdminUseCase {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
            self.result.clone()
        }
    }

    async fn call_login(
        use_case: MockLoginAdminUseCase,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_login_admin(use_case)
            .build();
        let app = test::init_service(App::new().app_data(state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn login_success_returns_token_and_email() {
        // Arrange
        let use_case = MockLoginAdminUseCase {
            result: Ok(LoginAdminResponse {
                token: "jwt-token".to_string(),
                email: "admin@example.com".to_string(),
            }),
        };

        // Act
        let (status, body) = call_login(
            use_case,
            json!({ "email": "admin@example.com", "password": "secret" }),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Login successful",
                "token": "jwt-token",
                "email": "admin@example.com"
            })
        );
    }

    #[actix_web::test]
    async fn invalid_credentials_return_unauthorized() {
        let use_case = MockLoginAdminUseCase {
            result: Err(LoginError::InvalidCredentials),
        };

        let (status, body) = call_login(
            use_case,
            json!({ "email": "admin@example.com", "password": "wrong" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn malformed_email_is_bad_request() {
        let use_case = MockLoginAdminUseCase {
            result: Err(LoginError::InvalidCredentials),
        };

        let (status, body) =
            call_login(use_case, json!({ "email": "nope", "password": "x" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email format");
    }

    #[actix_web::test]
    async fn token_failure_is_internal_error() {
        let use_case = MockLoginAdminUseCase {
            result: Err(LoginError::TokenGenerationFailed("boom".to_string())),
        };

        let (status, body) = call_login(
            use_case,
            json!({ "email": "admin@example.com", "password": "secret" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
    }
}
