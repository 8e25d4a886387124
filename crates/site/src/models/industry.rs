//! Industry domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::IndustryId;

/// An industry the company serves (mining, pulp & paper, energy, ...).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Industry {
    pub id: IndustryId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for an industry. Updates overwrite every field.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}
