//! Contact message admin handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use ironvale_core::{ContactMessageId, MessageStatus};

use crate::db::MessageRepository;
use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::ContactMessage;
use crate::state::AppState;

/// Status update body.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: MessageStatus,
}

/// List all contact messages, newest first.
///
/// GET /api/admin/messages
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>> {
    let messages = MessageRepository::new(state.pool()).list().await?;
    Ok(Json(messages))
}

/// Set a message's status. Any transition is allowed.
///
/// PUT /api/admin/messages/{id}/status
#[instrument(skip(state))]
pub async fn set_status(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<ContactMessageId>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<ContactMessage>> {
    let message = MessageRepository::new(state.pool())
        .set_status(id, body.status)
        .await?;
    Ok(Json(message))
}

/// Delete a message.
///
/// DELETE /api/admin/messages/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<ContactMessageId>,
) -> Result<StatusCode> {
    MessageRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
