//! Admin user domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::{AdminRole, AdminUserId};

/// An admin account row.
///
/// The password hash never leaves the server; it is skipped during
/// serialization so the model can be returned from the admin API as-is.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Login name, unique.
    pub username: String,
    /// Email address, unique.
    pub email: String,
    /// Argon2 hash of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Permission level.
    pub role: AdminRole,
    /// Login eligibility gate. Toggled to revoke access without deleting.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The authenticated principal decoded from a bearer token.
///
/// Carried by the auth extractors; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub username: String,
    pub role: AdminRole,
}

/// Create payload for an admin account. The plaintext password is hashed
/// before it reaches the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: AdminRole,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}

/// Update payload for an admin account. Omitting `password` keeps the
/// current hash.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUserUpdate {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub role: AdminRole,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}

impl From<&AdminUser> for CurrentAdmin {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = AdminUser {
            id: AdminUserId::new(1),
            username: "admin".to_string(),
            email: "admin@ironvalesupply.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            role: AdminRole::Admin,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).expect("serialize");
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("\"username\":\"admin\""));
        assert!(json.contains("\"role\":\"admin\""));
    }
}
