//! Division domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::DivisionId;

/// A business division with its own landing page.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Division {
    pub id: DivisionId,
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub image_url: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for a division. Updates overwrite every field.
#[derive(Debug, Clone, Deserialize)]
pub struct DivisionInput {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}
