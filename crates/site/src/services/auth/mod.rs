//! Authentication service.
//!
//! Decides whether a `(username, password)` pair identifies an active admin
//! account and mints the bearer token presented on subsequent requests.
//! Token verification itself lives in [`token::TokenSigner`] and is invoked
//! by the auth extractors before handlers run.

mod error;
pub mod token;

pub use error::{AuthError, TokenError};
pub use token::TokenSigner;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use crate::db::admin_users::AdminUserRepository;
use crate::models::CurrentAdmin;

/// Authentication service.
pub struct AuthService<'a> {
    users: AdminUserRepository<'a>,
    signer: &'a TokenSigner,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, signer: &'a TokenSigner) -> Self {
        Self {
            users: AdminUserRepository::new(pool),
            signer,
        }
    }

    /// Login with username and password.
    ///
    /// Looks up exactly one active account by username and verifies the
    /// password against the stored argon2 hash. Unknown usernames, inactive
    /// accounts, and wrong passwords all fail the same way.
    ///
    /// On success, returns a signed bearer token and the principal it
    /// encodes. Nothing is persisted; the token is the only proof of login.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair does not identify
    /// an active account.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, CurrentAdmin), AuthError> {
        let user = self
            .users
            .get_active_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        let principal = CurrentAdmin::from(&user);
        let token = self.signer.issue(&principal);

        Ok((token, principal))
    }
}

/// Hash a password with argon2 and a fresh per-hash salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verify a password against a stored argon2 hash (constant-time).
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` on mismatch.
/// Returns `AuthError::PasswordHash` if the stored hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("admin123").expect("hash");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("admin123", &hash).is_ok());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("admin123").expect("hash");
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("admin123").expect("hash");
        let b = hash_password("admin123").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_is_not_credentials_error() {
        assert!(matches!(
            verify_password("admin123", "not-a-hash"),
            Err(AuthError::PasswordHash(_))
        ));
    }
}
