//! Division repository for database operations.

use sqlx::PgPool;

use ironvale_core::DivisionId;

use super::RepositoryError;
use crate::models::{Division, DivisionInput};

const COLUMNS: &str = "id, name, tagline, description, logo_url, image_url, \
                       order_index, is_active, created_at, updated_at";

/// Repository for division database operations.
pub struct DivisionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DivisionRepository<'a> {
    /// Create a new division repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all divisions ordered by `order_index`, then recency.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Division>, RepositoryError> {
        let divisions = sqlx::query_as::<_, Division>(&format!(
            "SELECT {COLUMNS} FROM divisions ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(divisions)
    }

    /// List only active divisions, for the public site.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Division>, RepositoryError> {
        let divisions = sqlx::query_as::<_, Division>(&format!(
            "SELECT {COLUMNS} FROM divisions WHERE is_active \
             ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(divisions)
    }

    /// Get a division by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: DivisionId) -> Result<Option<Division>, RepositoryError> {
        let division = sqlx::query_as::<_, Division>(&format!(
            "SELECT {COLUMNS} FROM divisions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(division)
    }

    /// Insert a new division, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &DivisionInput) -> Result<Division, RepositoryError> {
        let division = sqlx::query_as::<_, Division>(&format!(
            "INSERT INTO divisions (name, tagline, description, logo_url, image_url, \
                                    order_index, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.tagline)
        .bind(&input.description)
        .bind(&input.logo_url)
        .bind(&input.image_url)
        .bind(input.order_index)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(division)
    }

    /// Overwrite all fields of a division (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the division doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: DivisionId,
        input: &DivisionInput,
    ) -> Result<Division, RepositoryError> {
        let division = sqlx::query_as::<_, Division>(&format!(
            "UPDATE divisions \
             SET name = $1, tagline = $2, description = $3, logo_url = $4, \
                 image_url = $5, order_index = $6, is_active = $7, updated_at = now() \
             WHERE id = $8 \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.tagline)
        .bind(&input.description)
        .bind(&input.logo_url)
        .bind(&input.image_url)
        .bind(input.order_index)
        .bind(input.is_active)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        division.ok_or(RepositoryError::NotFound)
    }

    /// Delete a division.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the division doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: DivisionId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM divisions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
