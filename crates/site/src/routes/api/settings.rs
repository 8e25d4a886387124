//! Site settings handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::SettingsRepository;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::{Settings, SettingsInput};
use crate::routes::api::require_field;
use crate::state::AppState;

/// Get the site settings. Public; the renderer and the admin UI read the
/// same singleton.
///
/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> Result<Json<Settings>> {
    let settings = SettingsRepository::new(state.pool()).get().await?;
    Ok(Json(settings))
}

/// Overwrite the site settings. Admin role required.
///
/// PUT /api/admin/settings
#[instrument(skip(state, input), fields(admin = %admin.username))]
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SettingsInput>,
) -> Result<Json<Settings>> {
    require_field(&input.site_name, "site_name")?;

    let settings = SettingsRepository::new(state.pool()).update(&input).await?;
    Ok(Json(settings))
}
