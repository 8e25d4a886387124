//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Reasons a bearer token is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a `payload.signature` pair, or undecodable parts.
    #[error("malformed token")]
    Malformed,
    /// Signature does not match the payload.
    #[error("bad signature")]
    BadSignature,
    /// The token's expiry instant has passed.
    #[error("token expired")]
    Expired,
}

/// Errors from the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username, inactive account, or wrong password. Reported
    /// identically in all three cases to avoid username enumeration.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The presented token failed verification.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    /// Password hashing/parsing failed.
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// Database operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
