//! Brand domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::BrandId;

/// A manufacturer brand carried by the company.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for a brand. Updates overwrite every field.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandInput {
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}
