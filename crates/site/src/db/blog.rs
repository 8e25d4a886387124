//! Blog post repository for database operations.

use sqlx::PgPool;

use ironvale_core::{AdminUserId, BlogPostId};

use super::{RepositoryError, map_unique_violation};
use crate::models::{BlogPost, BlogPostInput};

const COLUMNS: &str = "id, title, slug, excerpt, content, cover_image, author_id, \
                       published, published_at, created_at, updated_at";

/// Repository for blog post database operations.
pub struct BlogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BlogRepository<'a> {
    /// Create a new blog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<BlogPost>, RepositoryError> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// List published posts, newest first, for the public site.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_published(&self) -> Result<Vec<BlogPost>, RepositoryError> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE published \
             ORDER BY published_at DESC NULLS LAST"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a post by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: BlogPostId) -> Result<Option<BlogPost>, RepositoryError> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    /// Get a published post by slug, for the public site.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<BlogPost>, RepositoryError> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND published"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    /// Insert a new post, returning the stored row.
    ///
    /// `published_at` is stamped now when the post is created already
    /// published.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        input: &BlogPostInput,
        author_id: Option<AdminUserId>,
    ) -> Result<BlogPost, RepositoryError> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "INSERT INTO blog_posts (title, slug, excerpt, content, cover_image, \
                                     author_id, published, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, CASE WHEN $7 THEN now() END) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.cover_image)
        .bind(author_id)
        .bind(input.published)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "slug"))?;

        Ok(post)
    }

    /// Overwrite all fields of a post (last writer wins).
    ///
    /// `published_at` is stamped the first time `published` flips to true
    /// and kept afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the post doesn't exist.
    /// Returns `RepositoryError::Conflict` if the new slug already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: BlogPostId,
        input: &BlogPostInput,
    ) -> Result<BlogPost, RepositoryError> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "UPDATE blog_posts \
             SET title = $1, slug = $2, excerpt = $3, content = $4, cover_image = $5, \
                 published = $6, \
                 published_at = CASE \
                     WHEN $6 AND published_at IS NULL THEN now() \
                     ELSE published_at \
                 END, \
                 updated_at = now() \
             WHERE id = $7 \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.cover_image)
        .bind(input.published)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "slug"))?;

        post.ok_or(RepositoryError::NotFound)
    }

    /// Delete a post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the post doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: BlogPostId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
