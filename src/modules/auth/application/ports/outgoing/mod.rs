pub mod admin_directory;
pub mod password_hasher;
pub mod token_provider;

pub use admin_directory::{AdminDirectory, AdminDirectoryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
