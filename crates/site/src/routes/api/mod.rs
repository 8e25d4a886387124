//! JSON API route handlers.
//!
//! Public read endpoints live under `/api/...`; the authenticated admin
//! surface under `/api/admin/...`. All handlers return
//! `Result<_, AppError>` so failures serialize uniformly as
//! `{"error": "..."}`.

pub mod auth;
pub mod blog;
pub mod brands;
pub mod contact;
pub mod divisions;
pub mod industries;
pub mod messages;
pub mod offices;
pub mod quotes;
pub mod sections;
pub mod services;
pub mod settings;
pub mod uploads;
pub mod users;

use crate::error::AppError;

/// Reject an empty or whitespace-only required field.
pub(crate) fn require_field(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} is required")));
    }
    Ok(())
}

/// Basic email shape check: non-empty local part, domain with a dot.
pub(crate) fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && !domain.is_empty() && domain.contains('.')
    });

    if !valid {
        return Err(AppError::Validation(
            "A valid email address is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field() {
        assert!(require_field("Bearings", "name").is_ok());
        assert!(require_field("", "name").is_err());
        assert!(require_field("   ", "name").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ops@ironvalesupply.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@missing-local.com").is_err());
        assert!(validate_email("user@nodot").is_err());
    }
}
