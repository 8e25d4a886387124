//! Industry repository for database operations.

use sqlx::PgPool;

use ironvale_core::IndustryId;

use super::RepositoryError;
use crate::models::{Industry, IndustryInput};

const COLUMNS: &str =
    "id, name, description, image_url, order_index, is_active, created_at, updated_at";

/// Repository for industry database operations.
pub struct IndustryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> IndustryRepository<'a> {
    /// Create a new industry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all industries ordered by `order_index`, then recency.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Industry>, RepositoryError> {
        let industries = sqlx::query_as::<_, Industry>(&format!(
            "SELECT {COLUMNS} FROM industries ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(industries)
    }

    /// List only active industries, for the public site.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Industry>, RepositoryError> {
        let industries = sqlx::query_as::<_, Industry>(&format!(
            "SELECT {COLUMNS} FROM industries WHERE is_active \
             ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(industries)
    }

    /// Insert a new industry, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &IndustryInput) -> Result<Industry, RepositoryError> {
        let industry = sqlx::query_as::<_, Industry>(&format!(
            "INSERT INTO industries (name, description, image_url, order_index, is_active) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.order_index)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(industry)
    }

    /// Overwrite all fields of an industry (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the industry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: IndustryId,
        input: &IndustryInput,
    ) -> Result<Industry, RepositoryError> {
        let industry = sqlx::query_as::<_, Industry>(&format!(
            "UPDATE industries \
             SET name = $1, description = $2, image_url = $3, order_index = $4, \
                 is_active = $5, updated_at = now() \
             WHERE id = $6 \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.order_index)
        .bind(input.is_active)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        industry.ok_or(RepositoryError::NotFound)
    }

    /// Delete an industry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the industry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: IndustryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM industries WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
