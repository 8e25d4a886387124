//! Quote request repository for database operations.

use sqlx::PgPool;

use ironvale_core::{QuoteRequestId, QuoteStatus};

use super::RepositoryError;
use crate::models::{QuoteRequest, QuoteRequestInput};

const COLUMNS: &str =
    "id, name, company, email, phone, product_category, message, status, created_at";

/// Repository for quote request database operations.
pub struct QuoteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> QuoteRepository<'a> {
    /// Create a new quote repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all quote requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<QuoteRequest>, RepositoryError> {
        let quotes = sqlx::query_as::<_, QuoteRequest>(&format!(
            "SELECT {COLUMNS} FROM quote_requests ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(quotes)
    }

    /// Insert a visitor-submitted quote request with status `new`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        input: &QuoteRequestInput,
    ) -> Result<QuoteRequest, RepositoryError> {
        let quote = sqlx::query_as::<_, QuoteRequest>(&format!(
            "INSERT INTO quote_requests (name, company, email, phone, product_category, message) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.company)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.product_category)
        .bind(&input.message)
        .fetch_one(self.pool)
        .await?;

        Ok(quote)
    }

    /// Set a quote request's status. Any status may be set from any other.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the quote doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_status(
        &self,
        id: QuoteRequestId,
        status: QuoteStatus,
    ) -> Result<QuoteRequest, RepositoryError> {
        let quote = sqlx::query_as::<_, QuoteRequest>(&format!(
            "UPDATE quote_requests SET status = $1 WHERE id = $2 RETURNING {COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        quote.ok_or(RepositoryError::NotFound)
    }

    /// Delete a quote request.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the quote doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: QuoteRequestId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM quote_requests WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
