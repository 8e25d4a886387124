//! Public page route handlers.
//!
//! Pages are rendered server-side with Askama and read through the same
//! repositories as the JSON API, restricted to active rows. Every page
//! shares the `base.html` layout fed from the settings singleton.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use ironvale_core::DivisionId;

use crate::db::{
    BlogRepository, BrandRepository, DivisionRepository, IndustryRepository, OfficeRepository,
    SectionRepository, ServiceFilter, ServiceRepository, SettingsRepository,
};
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::{BlogPost, Brand, Division, Industry, Office, Section, Service, Settings};
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub settings: Settings,
    pub sections: Vec<Section>,
    pub services: Vec<Service>,
    pub industries: Vec<Industry>,
    pub brands: Vec<Brand>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let pool = state.pool();

    let settings = SettingsRepository::new(pool).get().await?;
    let sections = SectionRepository::new(pool).list_active().await?;
    let services = ServiceRepository::new(pool)
        .list_filtered(ServiceFilter {
            section_id: None,
            active_only: true,
        })
        .await?;
    let industries = IndustryRepository::new(pool).list_active().await?;
    let brands = BrandRepository::new(pool).list_active().await?;

    Ok(HomeTemplate {
        settings,
        sections,
        services,
        industries,
        brands,
    })
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub settings: Settings,
    pub industries: Vec<Industry>,
    pub offices: Vec<Office>,
}

/// Display the about page.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let pool = state.pool();

    let settings = SettingsRepository::new(pool).get().await?;
    let industries = IndustryRepository::new(pool).list_active().await?;
    let offices = OfficeRepository::new(pool).list_active().await?;

    Ok(AboutTemplate {
        settings,
        industries,
        offices,
    })
}

/// Blog index template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub settings: Settings,
    pub posts: Vec<BlogPost>,
}

/// Display the blog index with all published posts.
#[instrument(skip(state))]
pub async fn blog_index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let pool = state.pool();

    let settings = SettingsRepository::new(pool).get().await?;
    let posts = BlogRepository::new(pool).list_published().await?;

    Ok(BlogIndexTemplate { settings, posts })
}

/// Blog post detail template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/show.html")]
pub struct BlogShowTemplate {
    pub settings: Settings,
    pub post: BlogPost,
}

/// Display a single published blog post by slug.
///
/// # Errors
///
/// Returns 404 if the post doesn't exist or is unpublished.
#[instrument(skip(state))]
pub async fn blog_show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let pool = state.pool();

    let settings = SettingsRepository::new(pool).get().await?;
    let post = BlogRepository::new(pool)
        .get_published_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post".to_string()))?;

    Ok(BlogShowTemplate { settings, post })
}

/// Divisions index template.
#[derive(Template, WebTemplate)]
#[template(path = "divisions/index.html")]
pub struct DivisionsTemplate {
    pub settings: Settings,
    pub divisions: Vec<Division>,
}

/// Display the divisions overview page.
#[instrument(skip(state))]
pub async fn divisions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let pool = state.pool();

    let settings = SettingsRepository::new(pool).get().await?;
    let divisions = DivisionRepository::new(pool).list_active().await?;

    Ok(DivisionsTemplate {
        settings,
        divisions,
    })
}

/// Division detail template.
#[derive(Template, WebTemplate)]
#[template(path = "divisions/show.html")]
pub struct DivisionShowTemplate {
    pub settings: Settings,
    pub division: Division,
    pub brands: Vec<Brand>,
}

/// Display a single division page.
///
/// # Errors
///
/// Returns 404 if the division doesn't exist or is inactive.
#[instrument(skip(state))]
pub async fn division_show(
    State(state): State<AppState>,
    Path(id): Path<DivisionId>,
) -> Result<impl IntoResponse> {
    let pool = state.pool();

    let settings = SettingsRepository::new(pool).get().await?;
    let division = DivisionRepository::new(pool)
        .get(id)
        .await?
        .filter(|d| d.is_active)
        .ok_or_else(|| AppError::NotFound("Division".to_string()))?;
    let brands = BrandRepository::new(pool).list_active().await?;

    Ok(DivisionShowTemplate {
        settings,
        division,
        brands,
    })
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub settings: Settings,
    pub offices: Vec<Office>,
}

/// Display the contact page with office locations and the contact form.
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let pool = state.pool();

    let settings = SettingsRepository::new(pool).get().await?;
    let offices = OfficeRepository::new(pool).list_active().await?;

    Ok(ContactTemplate { settings, offices })
}
