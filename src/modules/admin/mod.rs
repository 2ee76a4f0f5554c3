pub mod about_screen;
pub mod collection_screen;
pub mod form;
mod form_schemas;
pub mod inbox_screen;
pub mod resume_screen;

use crate::client::{auth_session::AuthSession, notice::Notice};

pub const LOGIN_REQUIRED: &str = "Please log in to continue";

/// The session's token, or the notice to show instead of calling the API.
fn require_token(session: &AuthSession) -> Result<&str, Notice> {
    session.token().ok_or_else(|| Notice::new(LOGIN_REQUIRED))
}
