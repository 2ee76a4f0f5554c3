use tracing::{info, warn};

use super::api::{ApiError, AuthApi};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        email: String,
    },
}

/// Login state of one visitor, passed explicitly to every protected operation.
///
/// The token lives only in memory and has no expiry handling.
#[derive(Debug, Default)]
pub struct AuthSession {
    state: AuthState,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that already holds `token`, e.g. one restored by the caller.
    pub fn authenticated(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            state: AuthState::Authenticated {
                token: token.into(),
                email: email.into(),
            },
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { token, .. } => Some(token),
            AuthState::Anonymous => None,
        }
    }

    /// On failure the session keeps its previous state.
    pub async fn login<A>(&mut self, api: &A, email: &str, password: &str) -> Result<(), ApiError>
    where
        A: AuthApi + ?Sized,
    {
        match api.login(email, password).await {
            Ok(login) => {
                info!(email = %login.email, "Admin logged in");
                self.state = AuthState::Authenticated {
                    token: login.token,
                    email: login.email,
                };
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Admin login failed");
                Err(e)
            }
        }
    }

    /// Forgets the token. The server is not contacted.
    pub fn logout(&mut self) {
        self.state = AuthState::Anonymous;
    }
}
