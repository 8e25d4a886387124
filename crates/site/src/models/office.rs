//! Office domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::OfficeId;

/// A branch office location.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Office {
    pub id: OfficeId,
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Marks the head office for the contact page.
    pub is_headquarters: bool,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for an office. Updates overwrite every field.
#[derive(Debug, Clone, Deserialize)]
pub struct OfficeInput {
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_headquarters: bool,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}
