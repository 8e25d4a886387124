//! Admin account management handlers. All require the admin role.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use ironvale_core::AdminUserId;

use crate::db::AdminUserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::{AdminUser, AdminUserCreate, AdminUserUpdate};
use crate::routes::api::{require_field, validate_email};
use crate::services::auth::hash_password;
use crate::state::AppState;

/// List all admin accounts.
///
/// GET /api/admin/users
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminUser>>> {
    let users = AdminUserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Create an admin account. The password is hashed before storage.
///
/// POST /api/admin/users
#[instrument(skip(state, input), fields(username = %input.username, by = %admin.username))]
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<AdminUserCreate>,
) -> Result<(StatusCode, Json<AdminUser>)> {
    require_field(&input.username, "username")?;
    require_field(&input.password, "password")?;
    validate_email(&input.email)?;

    let password_hash = hash_password(&input.password)?;
    let user = AdminUserRepository::new(state.pool())
        .create(
            &input.username,
            &input.email,
            &password_hash,
            input.role,
            input.is_active,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Overwrite an admin account. Omitting `password` keeps the current hash.
///
/// PUT /api/admin/users/{id}
#[instrument(skip(state, input), fields(by = %admin.username))]
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AdminUserId>,
    Json(input): Json<AdminUserUpdate>,
) -> Result<Json<AdminUser>> {
    require_field(&input.username, "username")?;
    validate_email(&input.email)?;

    let password_hash = match &input.password {
        Some(password) => {
            require_field(password, "password")?;
            Some(hash_password(password)?)
        }
        None => None,
    };

    let user = AdminUserRepository::new(state.pool())
        .update(
            id,
            &input.username,
            &input.email,
            password_hash.as_deref(),
            input.role,
            input.is_active,
        )
        .await?;

    Ok(Json(user))
}

/// Delete an admin account. Self-deletion is rejected so an admin cannot
/// lock themselves out mid-session.
///
/// DELETE /api/admin/users/{id}
#[instrument(skip(state), fields(by = %admin.username))]
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AdminUserId>,
) -> Result<StatusCode> {
    if id == admin.id {
        return Err(AppError::Validation(
            "Cannot delete your own account".to_string(),
        ));
    }

    AdminUserRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
