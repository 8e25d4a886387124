//! Section repository for database operations.

use sqlx::PgPool;

use ironvale_core::SectionId;

use super::RepositoryError;
use crate::models::{Section, SectionInput};

const COLUMNS: &str = "id, name, title, subtitle, description, image_url, \
                       order_index, is_active, created_at, updated_at";

/// Repository for section database operations.
pub struct SectionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SectionRepository<'a> {
    /// Create a new section repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all sections ordered by `order_index`, then recency.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Section>, RepositoryError> {
        let sections = sqlx::query_as::<_, Section>(&format!(
            "SELECT {COLUMNS} FROM sections ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(sections)
    }

    /// List only active sections, for the public site.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Section>, RepositoryError> {
        let sections = sqlx::query_as::<_, Section>(&format!(
            "SELECT {COLUMNS} FROM sections WHERE is_active \
             ORDER BY order_index ASC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(sections)
    }

    /// Get a section by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: SectionId) -> Result<Option<Section>, RepositoryError> {
        let section = sqlx::query_as::<_, Section>(&format!(
            "SELECT {COLUMNS} FROM sections WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(section)
    }

    /// Insert a new section, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &SectionInput) -> Result<Section, RepositoryError> {
        let section = sqlx::query_as::<_, Section>(&format!(
            "INSERT INTO sections (name, title, subtitle, description, image_url, \
                                   order_index, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.subtitle)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.order_index)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(section)
    }

    /// Overwrite all fields of a section (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the section doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: SectionId,
        input: &SectionInput,
    ) -> Result<Section, RepositoryError> {
        let section = sqlx::query_as::<_, Section>(&format!(
            "UPDATE sections \
             SET name = $1, title = $2, subtitle = $3, description = $4, \
                 image_url = $5, order_index = $6, is_active = $7, updated_at = now() \
             WHERE id = $8 \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.subtitle)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.order_index)
        .bind(input.is_active)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        section.ok_or(RepositoryError::NotFound)
    }

    /// Delete a section. Services owned by it cascade-delete via the
    /// foreign key constraint.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the section doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: SectionId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
