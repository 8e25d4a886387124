//! Admin user repository for database operations.

use sqlx::PgPool;

use ironvale_core::{AdminRole, AdminUserId};

use super::{RepositoryError, map_unique_violation};
use crate::models::AdminUser;

const COLUMNS: &str =
    "id, username, email, password_hash, role, is_active, created_at, updated_at";

/// Repository for admin user database operations.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all admin accounts, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<AdminUser>, RepositoryError> {
        let users = sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {COLUMNS} FROM admin_users ORDER BY created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get an account by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: AdminUserId) -> Result<Option<AdminUser>, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {COLUMNS} FROM admin_users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get an active account by username, for login.
    ///
    /// Inactive accounts are filtered out here so login treats them
    /// identically to nonexistent ones.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_active_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {COLUMNS} FROM admin_users WHERE username = $1 AND is_active"
        ))
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a new admin account with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username or email is taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: AdminRole,
        is_active: bool,
    ) -> Result<AdminUser, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(&format!(
            "INSERT INTO admin_users (username, email, password_hash, role, is_active) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(is_active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "username or email"))?;

        Ok(user)
    }

    /// Overwrite an account's fields. `password_hash` is kept when `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Conflict` if the username or email is taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: AdminUserId,
        username: &str,
        email: &str,
        password_hash: Option<&str>,
        role: AdminRole,
        is_active: bool,
    ) -> Result<AdminUser, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(&format!(
            "UPDATE admin_users \
             SET username = $1, email = $2, \
                 password_hash = COALESCE($3, password_hash), \
                 role = $4, is_active = $5, updated_at = now() \
             WHERE id = $6 \
             RETURNING {COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(is_active)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "username or email"))?;

        user.ok_or(RepositoryError::NotFound)
    }

    /// Delete an account.
    ///
    /// Normal operation deactivates accounts instead; deletion exists for
    /// cleanup and sets any blog posts' author reference to NULL.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: AdminUserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM admin_users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
