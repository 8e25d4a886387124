//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! iv-cli admin create -u ops -e ops@example.com -p 'secret' -r admin
//! ```

use ironvale_core::AdminRole;

use ironvale_site::db::AdminUserRepository;
use ironvale_site::services::auth::hash_password;

use super::CliError;

/// Create a new admin user with an argon2-hashed password.
///
/// # Errors
///
/// Returns `CliError::InvalidRole` for unknown roles and `CliError::Database`
/// if the insert fails (including username/email conflicts).
pub async fn create_user(
    username: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<(), CliError> {
    let role: AdminRole = role
        .parse()
        .map_err(|_| CliError::InvalidRole(role.to_string()))?;

    let password_hash =
        hash_password(password).map_err(|e| CliError::PasswordHash(e.to_string()))?;

    let pool = super::connect().await?;
    let user = AdminUserRepository::new(&pool)
        .create(username, email, &password_hash, role, true)
        .await?;

    tracing::info!(id = %user.id, username = %user.username, role = %user.role, "Admin user created");
    Ok(())
}
