//! Quote request admin handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use ironvale_core::{QuoteRequestId, QuoteStatus};

use crate::db::QuoteRepository;
use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::QuoteRequest;
use crate::state::AppState;

/// Status update body.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: QuoteStatus,
}

/// List all quote requests, newest first.
///
/// GET /api/admin/quotes
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuoteRequest>>> {
    let quotes = QuoteRepository::new(state.pool()).list().await?;
    Ok(Json(quotes))
}

/// Set a quote request's status. Any transition is allowed.
///
/// PUT /api/admin/quotes/{id}/status
#[instrument(skip(state))]
pub async fn set_status(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<QuoteRequestId>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<QuoteRequest>> {
    let quote = QuoteRepository::new(state.pool())
        .set_status(id, body.status)
        .await?;
    Ok(Json(quote))
}

/// Delete a quote request.
///
/// DELETE /api/admin/quotes/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<QuoteRequestId>,
) -> Result<StatusCode> {
    QuoteRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
