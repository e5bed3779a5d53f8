//! Administrator authentication routes

use crate::auth::AuthAdmin;
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use rahi_shared::{AdminProfile, LoginRequest, LoginResponse};

/// Create admin auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
}

/// Login with username and password
///
/// POST /api/admin/login
///
/// # Performance
/// Password verification is offloaded to blocking thread pool.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = AuthService::login(state.credentials(), state.tokens(), &req).await?;
    Ok(Json(response))
}

/// Identity carried by the presented token
///
/// GET /api/admin/me
///
/// # Authentication
/// Requires valid Bearer token in Authorization header.
async fn me(admin: AuthAdmin) -> Json<AdminProfile> {
    Json(AdminProfile {
        username: admin.username,
        role: admin.role,
    })
}
