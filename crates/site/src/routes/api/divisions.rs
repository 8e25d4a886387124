//! Division API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use ironvale_core::DivisionId;

use crate::db::DivisionRepository;
use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::{Division, DivisionInput};
use crate::routes::api::require_field;
use crate::state::AppState;

/// List active divisions for the public site.
///
/// GET /api/divisions
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Division>>> {
    let divisions = DivisionRepository::new(state.pool()).list_active().await?;
    Ok(Json(divisions))
}

/// List all divisions.
///
/// GET /api/admin/divisions
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<Division>>> {
    let divisions = DivisionRepository::new(state.pool()).list().await?;
    Ok(Json(divisions))
}

/// Create a division.
///
/// POST /api/admin/divisions
#[instrument(skip(state, input), fields(name = %input.name))]
pub async fn create(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<DivisionInput>,
) -> Result<(StatusCode, Json<Division>)> {
    require_field(&input.name, "name")?;

    let division = DivisionRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(division)))
}

/// Overwrite a division.
///
/// PUT /api/admin/divisions/{id}
pub async fn update(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DivisionId>,
    Json(input): Json<DivisionInput>,
) -> Result<Json<Division>> {
    require_field(&input.name, "name")?;

    let division = DivisionRepository::new(state.pool()).update(id, &input).await?;
    Ok(Json(division))
}

/// Delete a division.
///
/// DELETE /api/admin/divisions/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DivisionId>,
) -> Result<StatusCode> {
    DivisionRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
