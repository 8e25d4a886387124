//! Industry API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use ironvale_core::IndustryId;

use crate::db::IndustryRepository;
use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::{Industry, IndustryInput};
use crate::routes::api::require_field;
use crate::state::AppState;

/// List active industries for the public site.
///
/// GET /api/industries
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Industry>>> {
    let industries = IndustryRepository::new(state.pool()).list_active().await?;
    Ok(Json(industries))
}

/// List all industries.
///
/// GET /api/admin/industries
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<Industry>>> {
    let industries = IndustryRepository::new(state.pool()).list().await?;
    Ok(Json(industries))
}

/// Create an industry.
///
/// POST /api/admin/industries
#[instrument(skip(state, input), fields(name = %input.name))]
pub async fn create(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<IndustryInput>,
) -> Result<(StatusCode, Json<Industry>)> {
    require_field(&input.name, "name")?;

    let industry = IndustryRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(industry)))
}

/// Overwrite an industry.
///
/// PUT /api/admin/industries/{id}
pub async fn update(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<IndustryId>,
    Json(input): Json<IndustryInput>,
) -> Result<Json<Industry>> {
    require_field(&input.name, "name")?;

    let industry = IndustryRepository::new(state.pool()).update(id, &input).await?;
    Ok(Json(industry))
}

/// Delete an industry.
///
/// DELETE /api/admin/industries/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<IndustryId>,
) -> Result<StatusCode> {
    IndustryRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
