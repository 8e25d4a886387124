//! Service repository for database operations.

use sqlx::PgPool;
use sqlx::types::Json;

use ironvale_core::{SectionId, ServiceId};

use super::RepositoryError;
use crate::models::{Service, ServiceInput};

const COLUMNS: &str = "id, section_id, title, description, icon, image_url, \
                       features, order_index, is_active, created_at, updated_at";

/// Query filters for the public services listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceFilter {
    /// Restrict to services under this section.
    pub section_id: Option<SectionId>,
    /// Restrict to active services.
    pub active_only: bool,
}

/// Repository for service database operations.
pub struct ServiceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ServiceRepository<'a> {
    /// Create a new service repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all services ordered by `order_index`, then recency.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Service>, RepositoryError> {
        let services = sqlx::query_as::<_, Service>(&format!(
            "SELECT {COLUMNS} FROM services ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(services)
    }

    /// List services matching the given filter, for the public listing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_filtered(
        &self,
        filter: ServiceFilter,
    ) -> Result<Vec<Service>, RepositoryError> {
        // section_id = $1 is skipped when the bind is NULL
        let services = sqlx::query_as::<_, Service>(&format!(
            "SELECT {COLUMNS} FROM services \
             WHERE ($1::int IS NULL OR section_id = $1) \
               AND (NOT $2 OR is_active) \
             ORDER BY order_index ASC, created_at DESC"
        ))
        .bind(filter.section_id)
        .bind(filter.active_only)
        .fetch_all(self.pool)
        .await?;

        Ok(services)
    }

    /// Get a service by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ServiceId) -> Result<Option<Service>, RepositoryError> {
        let service = sqlx::query_as::<_, Service>(&format!(
            "SELECT {COLUMNS} FROM services WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(service)
    }

    /// Insert a new service, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails (including a
    /// foreign key violation for a nonexistent section).
    pub async fn create(&self, input: &ServiceInput) -> Result<Service, RepositoryError> {
        let service = sqlx::query_as::<_, Service>(&format!(
            "INSERT INTO services (section_id, title, description, icon, image_url, \
                                   features, order_index, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        ))
        .bind(input.section_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.icon)
        .bind(&input.image_url)
        .bind(Json(&input.features))
        .bind(input.order_index)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(service)
    }

    /// Overwrite all fields of a service (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the service doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ServiceId,
        input: &ServiceInput,
    ) -> Result<Service, RepositoryError> {
        let service = sqlx::query_as::<_, Service>(&format!(
            "UPDATE services \
             SET section_id = $1, title = $2, description = $3, icon = $4, \
                 image_url = $5, features = $6, order_index = $7, is_active = $8, \
                 updated_at = now() \
             WHERE id = $9 \
             RETURNING {COLUMNS}"
        ))
        .bind(input.section_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.icon)
        .bind(&input.image_url)
        .bind(Json(&input.features))
        .bind(input.order_index)
        .bind(input.is_active)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        service.ok_or(RepositoryError::NotFound)
    }

    /// Delete a service.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the service doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ServiceId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
