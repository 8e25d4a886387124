//! Blog post domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ironvale_core::{AdminUserId, BlogPostId};

/// A blog post.
///
/// `author_id` is optional and set to NULL if the author account is ever
/// removed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    /// URL slug, unique.
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub author_id: Option<AdminUserId>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for a blog post. Updates overwrite every field.
///
/// The author is taken from the authenticated principal on create, never
/// from the payload. `published_at` is stamped the first time `published`
/// flips to true.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPostInput {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
}
