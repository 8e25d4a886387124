//! Brand repository for database operations.

use sqlx::PgPool;

use ironvale_core::BrandId;

use super::RepositoryError;
use crate::models::{Brand, BrandInput};

const COLUMNS: &str =
    "id, name, logo_url, website_url, order_index, is_active, created_at, updated_at";

/// Repository for brand database operations.
pub struct BrandRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BrandRepository<'a> {
    /// Create a new brand repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all brands ordered by `order_index`, then recency.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Brand>, RepositoryError> {
        let brands = sqlx::query_as::<_, Brand>(&format!(
            "SELECT {COLUMNS} FROM brands ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(brands)
    }

    /// List only active brands, for the public site.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Brand>, RepositoryError> {
        let brands = sqlx::query_as::<_, Brand>(&format!(
            "SELECT {COLUMNS} FROM brands WHERE is_active \
             ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(brands)
    }

    /// Insert a new brand, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &BrandInput) -> Result<Brand, RepositoryError> {
        let brand = sqlx::query_as::<_, Brand>(&format!(
            "INSERT INTO brands (name, logo_url, website_url, order_index, is_active) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.logo_url)
        .bind(&input.website_url)
        .bind(input.order_index)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(brand)
    }

    /// Overwrite all fields of a brand (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the brand doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: BrandId, input: &BrandInput) -> Result<Brand, RepositoryError> {
        let brand = sqlx::query_as::<_, Brand>(&format!(
            "UPDATE brands \
             SET name = $1, logo_url = $2, website_url = $3, order_index = $4, \
                 is_active = $5, updated_at = now() \
             WHERE id = $6 \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.logo_url)
        .bind(&input.website_url)
        .bind(input.order_index)
        .bind(input.is_active)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        brand.ok_or(RepositoryError::NotFound)
    }

    /// Delete a brand.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the brand doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: BrandId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
