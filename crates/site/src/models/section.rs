//! Page section domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::SectionId;

/// A page section (hero, capabilities, etc.).
///
/// Sections own services: deleting a section cascades to its services at
/// the database level.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Section {
    pub id: SectionId,
    /// Machine name used by the renderer to locate the section (e.g. "hero").
    pub name: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Display position; lower sorts first.
    pub order_index: i32,
    /// Soft-delete / visibility flag.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for a section. Updates overwrite every field
/// (last writer wins, no partial merge).
#[derive(Debug, Clone, Deserialize)]
pub struct SectionInput {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}
