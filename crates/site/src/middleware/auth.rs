//! Authentication extractors for admin route handlers.
//!
//! Handlers opt into protection by taking one of these extractors as an
//! argument. The token is verified before the handler body runs and
//! before any database access.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use ironvale_core::AdminRole;

use crate::error::AppError;
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Cookie carrying the bearer token for browser sessions. The
/// `Authorization` header takes precedence when both are present.
const AUTH_COOKIE: &str = "auth-token";

/// Extractor that requires a valid token with at least the editor role.
///
/// Rejects with 401 if no token is presented or the token fails
/// verification.
pub struct RequireEditor(pub CurrentAdmin);

/// Extractor that requires a valid token with the admin role.
///
/// Rejects with 401 for missing/invalid tokens and 403 for editors.
pub struct RequireAdmin(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireEditor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let admin = authenticate(parts, &AppState::from_ref(state), AdminRole::Editor)?;
        Ok(Self(admin))
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let admin = authenticate(parts, &AppState::from_ref(state), AdminRole::Admin)?;
        Ok(Self(admin))
    }
}

/// Verify the presented token and check the role requirement.
fn authenticate(
    parts: &Parts,
    state: &AppState,
    required: AdminRole,
) -> Result<CurrentAdmin, AppError> {
    let token =
        extract_token(parts).ok_or_else(|| AppError::Unauthorized("Not authenticated".into()))?;
    let admin = state.signer().verify(&token).map_err(|e| {
        tracing::debug!(error = %e, "Token rejected");
        AppError::Unauthorized("Invalid or expired token".into())
    })?;

    if !admin.role.meets(required) {
        return Err(AppError::Forbidden("Insufficient permissions".into()));
    }

    Ok(admin)
}

/// Pull the token from the `Authorization` header or the auth cookie.
fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(value) = parts.headers.get(header::AUTHORIZATION) {
        if let Some(token) = bearer_token(value.to_str().ok()?) {
            return Some(token.to_string());
        }
    }

    let cookies = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    cookie_value(cookies, AUTH_COOKIE).map(str::to_string)
}

fn bearer_token(value: &str) -> Option<&str> {
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn test_cookie_value_parsing() {
        let header = "theme=dark; auth-token=abc.def; lang=en";
        assert_eq!(cookie_value(header, "auth-token"), Some("abc.def"));
        assert_eq!(cookie_value(header, "theme"), Some("dark"));
        assert_eq!(cookie_value(header, "missing"), None);
        assert_eq!(cookie_value("auth-token=", "auth-token"), None);
    }
}
