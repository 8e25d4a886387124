//! Section API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use ironvale_core::SectionId;

use crate::db::SectionRepository;
use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::{Section, SectionInput};
use crate::routes::api::require_field;
use crate::state::AppState;

/// List active sections for the public site.
///
/// GET /api/sections
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Section>>> {
    let sections = SectionRepository::new(state.pool()).list_active().await?;
    Ok(Json(sections))
}

/// List all sections, active or not.
///
/// GET /api/admin/sections
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<Section>>> {
    let sections = SectionRepository::new(state.pool()).list().await?;
    Ok(Json(sections))
}

/// Create a section.
///
/// POST /api/admin/sections
#[instrument(skip(state, input), fields(name = %input.name))]
pub async fn create(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<SectionInput>,
) -> Result<(StatusCode, Json<Section>)> {
    require_field(&input.name, "name")?;
    require_field(&input.title, "title")?;

    let section = SectionRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// Overwrite a section.
///
/// PUT /api/admin/sections/{id}
pub async fn update(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<SectionId>,
    Json(input): Json<SectionInput>,
) -> Result<Json<Section>> {
    require_field(&input.name, "name")?;
    require_field(&input.title, "title")?;

    let section = SectionRepository::new(state.pool()).update(id, &input).await?;
    Ok(Json(section))
}

/// Delete a section and, via cascade, its services.
///
/// DELETE /api/admin/sections/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<SectionId>,
) -> Result<StatusCode> {
    SectionRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
