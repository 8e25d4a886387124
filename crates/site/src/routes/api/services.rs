//! Service API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use ironvale_core::{SectionId, ServiceId};

use crate::db::{ServiceFilter, ServiceRepository};
use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::{Service, ServiceInput};
use crate::routes::api::require_field;
use crate::state::AppState;

/// Query parameters for the public service listing.
#[derive(Debug, Deserialize)]
pub struct ServiceListParams {
    #[serde(default)]
    pub section_id: Option<SectionId>,
    #[serde(default)]
    pub active_only: bool,
}

/// List services, optionally filtered by section and active flag.
///
/// GET /api/services?section_id=&active_only=
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<ServiceListParams>,
) -> Result<Json<Vec<Service>>> {
    let filter = ServiceFilter {
        section_id: params.section_id,
        active_only: params.active_only,
    };
    let services = ServiceRepository::new(state.pool()).list_filtered(filter).await?;
    Ok(Json(services))
}

/// List all services.
///
/// GET /api/admin/services
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<Service>>> {
    let services = ServiceRepository::new(state.pool()).list().await?;
    Ok(Json(services))
}

/// Create a service under a section.
///
/// POST /api/admin/services
#[instrument(skip(state, input), fields(title = %input.title))]
pub async fn create(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<ServiceInput>,
) -> Result<(StatusCode, Json<Service>)> {
    validate(&input)?;

    let service = ServiceRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// Overwrite a service.
///
/// PUT /api/admin/services/{id}
pub async fn update(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<ServiceId>,
    Json(input): Json<ServiceInput>,
) -> Result<Json<Service>> {
    validate(&input)?;

    let service = ServiceRepository::new(state.pool()).update(id, &input).await?;
    Ok(Json(service))
}

/// Delete a service.
///
/// DELETE /api/admin/services/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<ServiceId>,
) -> Result<StatusCode> {
    ServiceRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Required fields plus feature label shape.
fn validate(input: &ServiceInput) -> Result<()> {
    require_field(&input.title, "title")?;
    for feature in &input.features {
        require_field(feature, "feature")?;
    }
    Ok(())
}
