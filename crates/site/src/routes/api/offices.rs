//! Office API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use ironvale_core::OfficeId;

use crate::db::OfficeRepository;
use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::{Office, OfficeInput};
use crate::routes::api::require_field;
use crate::state::AppState;

/// List active offices for the public site.
///
/// GET /api/offices
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Office>>> {
    let offices = OfficeRepository::new(state.pool()).list_active().await?;
    Ok(Json(offices))
}

/// List all offices.
///
/// GET /api/admin/offices
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<Office>>> {
    let offices = OfficeRepository::new(state.pool()).list().await?;
    Ok(Json(offices))
}

/// Create an office.
///
/// POST /api/admin/offices
#[instrument(skip(state, input), fields(city = %input.city))]
pub async fn create(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<OfficeInput>,
) -> Result<(StatusCode, Json<Office>)> {
    require_field(&input.city, "city")?;
    require_field(&input.address, "address")?;

    let office = OfficeRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(office)))
}

/// Overwrite an office.
///
/// PUT /api/admin/offices/{id}
pub async fn update(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<OfficeId>,
    Json(input): Json<OfficeInput>,
) -> Result<Json<Office>> {
    require_field(&input.city, "city")?;
    require_field(&input.address, "address")?;

    let office = OfficeRepository::new(state.pool()).update(id, &input).await?;
    Ok(Json(office))
}

/// Delete an office.
///
/// DELETE /api/admin/offices/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<OfficeId>,
) -> Result<StatusCode> {
    OfficeRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
