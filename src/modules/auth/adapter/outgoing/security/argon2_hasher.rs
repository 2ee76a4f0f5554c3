use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    /// Library defaults (19 MiB, 2 iterations, 1 lane).
    pub fn new() -> Self {
        Self {
            params: Params::default(),
            #[cfg(test)]
            salt_override: None,
        }
    }

    /// Create with custom params (for testing or different environments)
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|_| HashError::HashFailed)?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    /// Environment-based configuration, falling back to [`Argon2Hasher::new`].
    pub fn from_env() -> Self {
        let read = |key: &str| std::env::var(key).ok().and_then(|v| v.parse::<u32>().ok());

        match (
            read("ARGON2_MEMORY_KIB"),
            read("ARGON2_ITERATIONS"),
            read("ARGON2_PARALLELISM"),
        ) {
            (None, None, None) => Self::new(),
            (memory, iterations, parallelism) => Self::with_params(
                memory.unwrap_or(Params::DEFAULT_M_COST),
                iterations.unwrap_or(Params::DEFAULT_T_COST),
                parallelism.unwrap_or(Params::DEFAULT_P_COST),
            )
            .unwrap_or_else(|_| {
                tracing::warn!("Invalid ARGON2_* settings, using defaults");
                Self::new()
            }),
        }
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(4 * 1024, 3, 1, None).expect("Invalid params"),
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(4 * 1024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_argon2_hash_and_verify_password() {
        let hasher = fast_hasher();
        let password = "SecurePassword123";

        let hashed_password = hasher
            .hash_password(password)
            .await
            .expect("Expected password hashing to succeed");

        let verify_correct = hasher.verify_password(password, &hashed_password).await;
        assert!(verify_correct.unwrap(), "Password should match");

        let verify_wrong = hasher
            .verify_password("WrongPassword", &hashed_password)
            .await;
        assert!(!verify_wrong.unwrap(), "Password should not match");

        let verify_invalid_hash = hasher.verify_password(password, "invalid-hash").await;
        assert!(
            verify_invalid_hash.is_err(),
            "Expected error for invalid hash format"
        );
    }

    #[tokio::test]
    async fn test_hash_password_error() {
        let bad_salt = SaltString::encode_b64(b"short").unwrap();

        let hasher = Argon2Hasher::with_fixed_salt(bad_salt.as_str());
        let result = hasher.hash_password("abc123").await;

        assert!(matches!(result, Err(HashError::HashFailed)));
    }

    #[tokio::test]
    async fn test_verify_password_error_branch() {
        let hasher = fast_hasher();
        let valid_hash = hasher.hash_password("password123").await.unwrap();

        let mut parts: Vec<&str> = valid_hash.split('$').collect();
        parts[3] = "m=0,t=0,p=0";
        let tampered_hash = parts.join("$");

        let result = hasher.verify_password("password123", &tampered_hash).await;

        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        assert!(Argon2Hasher::with_params(0, 0, 0).is_err());
    }
}
