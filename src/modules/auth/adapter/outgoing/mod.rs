pub mod admin_directory_static;
pub mod jwt;
pub mod security;
