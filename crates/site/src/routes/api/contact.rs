//! Public contact and quote submission handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;

use crate::db::{MessageRepository, QuoteRepository};
use crate::error::Result;
use crate::models::{ContactMessage, ContactMessageInput, QuoteRequest, QuoteRequestInput};
use crate::routes::api::{require_field, validate_email};
use crate::state::AppState;

/// Acknowledgement returned to the visitor.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub id: i32,
}

/// Submit a contact message.
///
/// POST /api/contact
#[instrument(skip(state, input), fields(email = %input.email))]
pub async fn submit_message(
    State(state): State<AppState>,
    Json(input): Json<ContactMessageInput>,
) -> Result<(StatusCode, Json<SubmissionResponse>)> {
    require_field(&input.name, "name")?;
    require_field(&input.message, "message")?;
    validate_email(&input.email)?;

    let message: ContactMessage = MessageRepository::new(state.pool()).create(&input).await?;

    tracing::info!(id = %message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            success: true,
            id: message.id.as_i32(),
        }),
    ))
}

/// Submit a quote request.
///
/// POST /api/quotes
#[instrument(skip(state, input), fields(email = %input.email))]
pub async fn submit_quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteRequestInput>,
) -> Result<(StatusCode, Json<SubmissionResponse>)> {
    require_field(&input.name, "name")?;
    require_field(&input.message, "message")?;
    validate_email(&input.email)?;

    let quote: QuoteRequest = QuoteRepository::new(state.pool()).create(&input).await?;

    tracing::info!(id = %quote.id, "Quote request received");

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            success: true,
            id: quote.id.as_i32(),
        }),
    ))
}
