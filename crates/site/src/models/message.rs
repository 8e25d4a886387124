//! Contact message domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::{ContactMessageId, MessageStatus};

/// A contact form submission. Written once by a visitor; only the status
/// is mutated afterwards, by admins.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

/// Visitor-facing contact form payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessageInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}
