pub mod api;
pub mod auth_session;
pub mod notice;
pub mod routing;
pub mod scope;
pub mod screen_state;
