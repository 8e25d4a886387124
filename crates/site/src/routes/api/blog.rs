//! Blog API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use ironvale_core::BlogPostId;

use crate::db::BlogRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireEditor;
use crate::models::{BlogPost, BlogPostInput};
use crate::routes::api::require_field;
use crate::state::AppState;

/// List published posts, newest first.
///
/// GET /api/blog
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>> {
    let posts = BlogRepository::new(state.pool()).list_published().await?;
    Ok(Json(posts))
}

/// Get a published post by slug.
///
/// GET /api/blog/{slug}
pub async fn get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>> {
    let post = BlogRepository::new(state.pool())
        .get_published_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post".to_string()))?;
    Ok(Json(post))
}

/// List all posts, drafts included.
///
/// GET /api/admin/blog
pub async fn list(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>> {
    let posts = BlogRepository::new(state.pool()).list().await?;
    Ok(Json(posts))
}

/// Create a post. The author is the authenticated principal.
///
/// POST /api/admin/blog
#[instrument(skip(state, input), fields(slug = %input.slug, author = %admin.username))]
pub async fn create(
    RequireEditor(admin): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<BlogPostInput>,
) -> Result<(StatusCode, Json<BlogPost>)> {
    validate(&input)?;

    let post = BlogRepository::new(state.pool())
        .create(&input, Some(admin.id))
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Overwrite a post. The original author is kept.
///
/// PUT /api/admin/blog/{id}
pub async fn update(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<BlogPostId>,
    Json(input): Json<BlogPostInput>,
) -> Result<Json<BlogPost>> {
    validate(&input)?;

    let post = BlogRepository::new(state.pool()).update(id, &input).await?;
    Ok(Json(post))
}

/// Delete a post.
///
/// DELETE /api/admin/blog/{id}
#[instrument(skip(state))]
pub async fn delete(
    RequireEditor(_admin): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<BlogPostId>,
) -> Result<StatusCode> {
    BlogRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate(input: &BlogPostInput) -> Result<()> {
    require_field(&input.title, "title")?;
    require_field(&input.slug, "slug")?;
    require_field(&input.content, "content")?;
    Ok(())
}
