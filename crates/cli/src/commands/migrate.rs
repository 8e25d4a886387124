//! Database migration command.
//!
//! Migration files live in `crates/site/migrations/` and are embedded at
//! compile time, so the binary can be run from anywhere.

use super::CliError;

/// Run the site database migrations.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
