use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

/// Header accepted by [`super::stubs::StubTokenProvider::accepting`].
pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

/// Registers a token provider the way `configure_app` does.
pub fn token_provider_data(
    provider: impl TokenProvider + Send + Sync + 'static,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "portfolio-test".to_string(),
        secret_key: "test_secret_key_for_testing_only".to_string(),
        access_token_expiry: 3600,
    })
}
