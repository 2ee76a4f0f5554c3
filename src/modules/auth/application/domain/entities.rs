/// The site owner's login, configured at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    /// Lowercased email address.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl AdminAccount {
    pub fn new(email: &str, password_hash: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash: password_hash.to_string(),
        }
    }
}
