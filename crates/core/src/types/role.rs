//! Admin roles and the ordering between them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing an [`AdminRole`] from a string.
#[derive(Debug, Error)]
#[error("invalid admin role: {0}")]
pub struct ParseRoleError(pub String);

/// Admin role with different permission levels.
///
/// Roles are ordered: `Editor < Admin`. A guarded endpoint declares the
/// minimum role it accepts and any role at or above it passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Content management access (all content entities, messages, quotes).
    Editor,
    /// Full access including settings, uploads, and admin user management.
    Admin,
}

impl AdminRole {
    /// Whether this role meets the given minimum role requirement.
    #[must_use]
    pub fn meets(self, minimum: Self) -> bool {
        self >= minimum
    }

    /// Stable string form, matching the database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdminRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "editor" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl TryFrom<String> for AdminRole {
    type Error = ParseRoleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// Stored as TEXT in postgres; decode/encode via the string form.
#[cfg(feature = "postgres")]
mod pg {
    use super::AdminRole;

    impl ::sqlx::Type<::sqlx::Postgres> for AdminRole {
        fn type_info() -> ::sqlx::postgres::PgTypeInfo {
            <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
        }

        fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
            <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
        }
    }

    impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for AdminRole {
        fn decode(
            value: ::sqlx::postgres::PgValueRef<'r>,
        ) -> Result<Self, ::sqlx::error::BoxDynError> {
            let s = <&str as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
            Ok(s.parse::<Self>()?)
        }
    }

    impl ::sqlx::Encode<'_, ::sqlx::Postgres> for AdminRole {
        fn encode_by_ref(
            &self,
            buf: &mut ::sqlx::postgres::PgArgumentBuffer,
        ) -> Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
            <&str as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ordering() {
        assert!(AdminRole::Admin.meets(AdminRole::Editor));
        assert!(AdminRole::Admin.meets(AdminRole::Admin));
        assert!(AdminRole::Editor.meets(AdminRole::Editor));
        assert!(!AdminRole::Editor.meets(AdminRole::Admin));
    }

    #[test]
    fn test_role_roundtrip() {
        for role in [AdminRole::Admin, AdminRole::Editor] {
            let parsed: AdminRole = role.to_string().parse().expect("parse role");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&AdminRole::Admin).expect("serialize");
        assert_eq!(json, "\"admin\"");
        assert!("owner".parse::<AdminRole>().is_err());
    }
}
