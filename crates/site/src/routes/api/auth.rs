//! Admin authentication endpoints.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireEditor;
use crate::models::CurrentAdmin;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: CurrentAdmin,
}

/// Log in with username and password.
///
/// POST /api/admin/auth/login
///
/// Returns a signed bearer token and the authenticated principal. Failure
/// is always 401 `{"error": "Invalid credentials"}` regardless of whether
/// the username exists.
#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let auth = AuthService::new(state.pool(), state.signer());
    let (token, user) = auth.login(&body.username, &body.password).await?;

    tracing::info!(username = %user.username, "Admin logged in");

    Ok(Json(LoginResponse { token, user }))
}

/// Return the principal behind the presented token.
///
/// GET /api/admin/auth/me
pub async fn me(RequireEditor(admin): RequireEditor) -> Json<CurrentAdmin> {
    Json(admin)
}
