//! Office repository for database operations.

use sqlx::PgPool;

use ironvale_core::OfficeId;

use super::RepositoryError;
use crate::models::{Office, OfficeInput};

const COLUMNS: &str = "id, city, address, phone, email, is_headquarters, \
                       order_index, is_active, created_at, updated_at";

/// Repository for office database operations.
pub struct OfficeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OfficeRepository<'a> {
    /// Create a new office repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all offices ordered by `order_index`, then recency.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Office>, RepositoryError> {
        let offices = sqlx::query_as::<_, Office>(&format!(
            "SELECT {COLUMNS} FROM offices ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(offices)
    }

    /// List only active offices, for the public site.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Office>, RepositoryError> {
        let offices = sqlx::query_as::<_, Office>(&format!(
            "SELECT {COLUMNS} FROM offices WHERE is_active \
             ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(offices)
    }

    /// Insert a new office, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &OfficeInput) -> Result<Office, RepositoryError> {
        let office = sqlx::query_as::<_, Office>(&format!(
            "INSERT INTO offices (city, address, phone, email, is_headquarters, \
                                  order_index, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.city)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(input.is_headquarters)
        .bind(input.order_index)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(office)
    }

    /// Overwrite all fields of an office (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the office doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: OfficeId,
        input: &OfficeInput,
    ) -> Result<Office, RepositoryError> {
        let office = sqlx::query_as::<_, Office>(&format!(
            "UPDATE offices \
             SET city = $1, address = $2, phone = $3, email = $4, \
                 is_headquarters = $5, order_index = $6, is_active = $7, \
                 updated_at = now() \
             WHERE id = $8 \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.city)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(input.is_headquarters)
        .bind(input.order_index)
        .bind(input.is_active)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        office.ok_or(RepositoryError::NotFound)
    }

    /// Delete an office.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the office doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: OfficeId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM offices WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
