//! Quote request domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::{QuoteRequestId, QuoteStatus};

/// A quote request submitted from the public site. Written once by a
/// visitor; only the status is mutated afterwards, by admins.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct QuoteRequest {
    pub id: QuoteRequestId,
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub product_category: Option<String>,
    pub message: String,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

/// Visitor-facing quote request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequestInput {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub product_category: Option<String>,
    pub message: String,
}
