//! Brand API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use ironvale_core::BrandId;

use crate::db::BrandRepository;
use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::{Brand, BrandInput};
use crate::routes::api::require_field;
use crate::state::AppState;

/// List active brands for the public site.
///
/// GET /api/brands
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Brand>>> {
    let brands = BrandRepository::new(state.pool()).list_active().await?;
    Ok(Json(brands))
}

/// List all brands.
///
/// GET /api/admin/brands
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<Brand>>> {
    let brands = BrandRepository::new(state.pool()).list().await?;
    Ok(Json(brands))
}

/// Create a brand.
///
/// POST /api/admin/brands
#[instrument(skip(state, input), fields(name = %input.name))]
pub async fn create(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<BrandInput>,
) -> Result<(StatusCode, Json<Brand>)> {
    require_field(&input.name, "name")?;

    let brand = BrandRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

/// Overwrite a brand.
///
/// PUT /api/admin/brands/{id}
pub async fn update(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<BrandId>,
    Json(input): Json<BrandInput>,
) -> Result<Json<Brand>> {
    require_field(&input.name, "name")?;

    let brand = BrandRepository::new(state.pool()).update(id, &input).await?;
    Ok(Json(brand))
}

/// Delete a brand.
///
/// DELETE /api/admin/brands/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<BrandId>,
) -> Result<StatusCode> {
    BrandRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
