//! Database operations for the site `PostgreSQL` database.
//!
//! # Tables
//!
//! - `admin_users` - Admin panel accounts
//! - `sections` / `services` - Page sections and the services under them
//!   (services cascade-delete with their section)
//! - `industries`, `offices`, `brands`, `divisions` - Independent content
//! - `blog_posts` - Blog content, optional author reference
//! - `contact_messages`, `quote_requests` - Visitor submissions
//! - `settings` - Singleton site settings row
//!
//! # Migrations
//!
//! Migrations are stored in `crates/site/migrations/` and run via:
//! ```bash
//! cargo run -p iv-cli -- migrate
//! ```
//!
//! Queries use the runtime `sqlx::query`/`query_as` API with `FromRow`
//! models, so the workspace builds without a live database.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod admin_users;
pub mod blog;
pub mod brands;
pub mod divisions;
pub mod industries;
pub mod messages;
pub mod offices;
pub mod quotes;
pub mod sections;
pub mod services;
pub mod settings;

pub use admin_users::AdminUserRepository;
pub use blog::BlogRepository;
pub use brands::BrandRepository;
pub use divisions::DivisionRepository;
pub use industries::IndustryRepository;
pub use messages::MessageRepository;
pub use offices::OfficeRepository;
pub use quotes::QuoteRepository;
pub use sections::SectionRepository;
pub use services::{ServiceFilter, ServiceRepository};
pub use settings::SettingsRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username or slug).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The pool is the only shared resource between requests and its capacity
/// (10) is the only backpressure mechanism in the system.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map a sqlx error to `Conflict` when it is a unique violation.
fn map_unique_violation(e: sqlx::Error, what: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(format!("{what} already exists"));
    }
    RepositoryError::Database(e)
}
