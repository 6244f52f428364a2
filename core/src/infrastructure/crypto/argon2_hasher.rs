use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

/// Argon2id with the crate defaults. Work runs on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        let hashed = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(|e| {
            error!("Password hashing task failed: {}", e);
            CoreError::HashError
        })?;

        hashed.map_err(|e| {
            error!("Failed to hash password: {}", e);
            CoreError::HashError
        })
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<bool, CoreError> {
        let verified = tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&password_hash)?;
            Ok::<bool, argon2::password_hash::Error>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
            )
        })
        .await
        .map_err(|e| {
            error!("Password verification task failed: {}", e);
            CoreError::HashError
        })?;

        verified.map_err(|e| {
            error!("Stored password hash is malformed: {}", e);
            CoreError::HashError
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = Argon2HasherRepository::new();
        let hash = hasher.hash_password("secret".to_string()).await.unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(
            hasher
                .verify_password("secret".to_string(), hash.clone())
                .await
                .unwrap()
        );
        assert!(
            !hasher
                .verify_password("wrong".to_string(), hash)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = Argon2HasherRepository::new();
        let first = hasher.hash_password("secret".to_string()).await.unwrap();
        let second = hasher.hash_password("secret".to_string()).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = Argon2HasherRepository::new();

        let result = hasher
            .verify_password("secret".to_string(), "not-a-hash".to_string())
            .await;

        assert_eq!(result, Err(CoreError::HashError));
    }
}
