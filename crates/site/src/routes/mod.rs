//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! # Public pages (HTML)
//! GET  /                        - Home page
//! GET  /about                   - About page
//! GET  /blog                    - Blog index
//! GET  /blog/{slug}             - Blog post
//! GET  /divisions               - Divisions overview
//! GET  /divisions/{id}          - Division detail
//! GET  /contact                 - Contact page
//!
//! # Public API (JSON)
//! GET  /api/sections            - Active sections
//! GET  /api/services            - Services (?section_id=&active_only=)
//! GET  /api/industries          - Active industries
//! GET  /api/offices             - Active offices
//! GET  /api/brands              - Active brands
//! GET  /api/divisions           - Active divisions
//! GET  /api/blog                - Published posts
//! GET  /api/blog/{slug}         - Published post by slug
//! GET  /api/settings            - Site settings
//! POST /api/contact             - Submit contact message
//! POST /api/quotes              - Submit quote request
//!
//! # Admin auth
//! POST /api/admin/auth/login    - Login, returns bearer token
//! GET  /api/admin/auth/me       - Decoded principal
//!
//! # Admin content (editor role or above)
//! /api/admin/{sections,services,industries,offices,brands,divisions,blog}
//!     GET / POST / PUT /{id} / DELETE /{id}
//! /api/admin/{messages,quotes}
//!     GET / PUT /{id}/status / DELETE /{id}
//!
//! # Admin-only
//! PUT    /api/admin/settings
//! POST   /api/admin/uploads
//! DELETE /api/admin/uploads/{type}/{filename}
//! /api/admin/users  GET / POST / PUT /{id} / DELETE /{id}
//! ```

pub mod api;
pub mod pages;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};

use crate::services::uploads::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Create the public page routes router.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/blog", get(pages::blog_index))
        .route("/blog/{slug}", get(pages::blog_show))
        .route("/divisions", get(pages::divisions))
        .route("/divisions/{id}", get(pages::division_show))
        .route("/contact", get(pages::contact))
}

/// Create the public JSON API router.
pub fn public_api_routes() -> Router<AppState> {
    Router::new()
        .route("/sections", get(api::sections::list_public))
        .route("/services", get(api::services::list_public))
        .route("/industries", get(api::industries::list_public))
        .route("/offices", get(api::offices::list_public))
        .route("/brands", get(api::brands::list_public))
        .route("/divisions", get(api::divisions::list_public))
        .route("/blog", get(api::blog::list_public))
        .route("/blog/{slug}", get(api::blog::get_public))
        .route("/settings", get(api::settings::get))
        .route("/contact", post(api::contact::submit_message))
        .route("/quotes", post(api::contact::submit_quote))
}

/// Create the admin API router. Handlers authenticate via extractors, so
/// unauthenticated requests are rejected before any work happens.
pub fn admin_api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Content entities (editor role or above)
        .route("/sections", get(api::sections::list).post(api::sections::create))
        .route(
            "/sections/{id}",
            put(api::sections::update).delete(api::sections::delete),
        )
        .route("/services", get(api::services::list).post(api::services::create))
        .route(
            "/services/{id}",
            put(api::services::update).delete(api::services::delete),
        )
        .route(
            "/industries",
            get(api::industries::list).post(api::industries::create),
        )
        .route(
            "/industries/{id}",
            put(api::industries::update).delete(api::industries::delete),
        )
        .route("/offices", get(api::offices::list).post(api::offices::create))
        .route(
            "/offices/{id}",
            put(api::offices::update).delete(api::offices::delete),
        )
        .route("/brands", get(api::brands::list).post(api::brands::create))
        .route(
            "/brands/{id}",
            put(api::brands::update).delete(api::brands::delete),
        )
        .route(
            "/divisions",
            get(api::divisions::list).post(api::divisions::create),
        )
        .route(
            "/divisions/{id}",
            put(api::divisions::update).delete(api::divisions::delete),
        )
        .route("/blog", get(api::blog::list).post(api::blog::create))
        .route("/blog/{id}", put(api::blog::update).delete(api::blog::delete))
        // Inbound messages and quotes
        .route("/messages", get(api::messages::list))
        .route("/messages/{id}/status", put(api::messages::set_status))
        .route("/messages/{id}", delete(api::messages::delete))
        .route("/quotes", get(api::quotes::list))
        .route("/quotes/{id}/status", put(api::quotes::set_status))
        .route("/quotes/{id}", delete(api::quotes::delete))
        // Admin-only surface
        .route("/settings", put(api::settings::update))
        .route(
            "/uploads",
            post(api::uploads::upload)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024)),
        )
        .route("/uploads/{type}/{filename}", delete(api::uploads::delete))
        .route("/users", get(api::users::list).post(api::users::create))
        .route(
            "/users/{id}",
            put(api::users::update).delete(api::users::delete),
        )
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .nest("/api", public_api_routes())
        .nest("/api/admin", admin_api_routes())
}
