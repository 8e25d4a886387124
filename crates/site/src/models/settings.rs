//! Site settings singleton.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Site-wide settings, stored as a single row (id = 1).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Settings {
    pub id: i32,
    pub site_name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub linkedin_url: Option<String>,
    pub facebook_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Update payload for the settings singleton. Overwrites every field.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsInput {
    pub site_name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
}
