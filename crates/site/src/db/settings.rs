//! Settings repository.
//!
//! The settings table holds exactly one row (id = 1), created by the
//! initial migration. Updates always target that row.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{Settings, SettingsInput};

const COLUMNS: &str = "id, site_name, tagline, logo_url, favicon_url, contact_email, \
                       contact_phone, address, linkedin_url, facebook_url, updated_at";

/// Repository for the site settings singleton.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the settings row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the singleton row is
    /// missing (the migration seeds it).
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self) -> Result<Settings, RepositoryError> {
        let settings =
            sqlx::query_as::<_, Settings>(&format!("SELECT {COLUMNS} FROM settings WHERE id = 1"))
                .fetch_optional(self.pool)
                .await?;

        settings.ok_or_else(|| {
            RepositoryError::DataCorruption("settings singleton row is missing".to_string())
        })
    }

    /// Overwrite the settings row (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the singleton row is
    /// missing.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(&self, input: &SettingsInput) -> Result<Settings, RepositoryError> {
        let settings = sqlx::query_as::<_, Settings>(&format!(
            "UPDATE settings \
             SET site_name = $1, tagline = $2, logo_url = $3, favicon_url = $4, \
                 contact_email = $5, contact_phone = $6, address = $7, \
                 linkedin_url = $8, facebook_url = $9, updated_at = now() \
             WHERE id = 1 \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.site_name)
        .bind(&input.tagline)
        .bind(&input.logo_url)
        .bind(&input.favicon_url)
        .bind(&input.contact_email)
        .bind(&input.contact_phone)
        .bind(&input.address)
        .bind(&input.linkedin_url)
        .bind(&input.facebook_url)
        .fetch_optional(self.pool)
        .await?;

        settings.ok_or_else(|| {
            RepositoryError::DataCorruption("settings singleton row is missing".to_string())
        })
    }
}
