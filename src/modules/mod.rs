pub mod admin;
pub mod auth;
pub mod client;
pub mod content;
pub mod email;
pub mod inbox;
pub mod profile;
pub mod resume;
pub mod site;
