//! Service domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use ironvale_core::{SectionId, ServiceId};

/// A service offered under a section.
///
/// `features` is an ordered list of short labels. It is stored as jsonb and
/// validated at the API boundary, so downstream consumers never see an
/// opaque string blob.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: ServiceId,
    /// Owning section. Cascade-deleted with it.
    pub section_id: SectionId,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    #[sqlx(json)]
    pub features: Json<Vec<String>>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for a service. Updates overwrite every field.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInput {
    pub section_id: SectionId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ordered list of short feature labels.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "crate::models::default_true")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_serialize_as_plain_array() {
        let service = Service {
            id: ServiceId::new(1),
            section_id: SectionId::new(2),
            title: "Bearing Reconditioning".to_string(),
            description: None,
            icon: None,
            image_url: None,
            features: Json(vec!["24h turnaround".to_string(), "OEM specs".to_string()]),
            order_index: 0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&service).expect("serialize");
        assert_eq!(
            value["features"],
            serde_json::json!(["24h turnaround", "OEM specs"])
        );
    }
}
