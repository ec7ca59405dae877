//! Authentication routes: register, login, current user.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, FieldError, Result};
use crate::middleware::CurrentUser;
use crate::models::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

/// Request body for account registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User plus a freshly issued token.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Register a new account.
///
/// # Errors
///
/// Returns a validation error for missing fields, `409` for a taken email.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let mut errors = Vec::new();
    if body.name.trim().is_empty() {
        errors.push(FieldError::new("name", "name is required"));
    }
    if body.email.trim().is_empty() {
        errors.push(FieldError::new("email", "email is required"));
    }
    if body.password.is_empty() {
        errors.push(FieldError::new("password", "password is required"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let auth = AuthService::new(state.pool(), state.tokens());
    let (user, token) = auth
        .register(body.name.trim(), body.email.trim(), &body.password)
        .await?;

    tracing::info!(user_id = %user.id, "account registered");

    Ok((StatusCode::CREATED, Json(AuthResponse { user, token })))
}

/// Login with email and password.
///
/// # Errors
///
/// Returns `401` for unknown email or wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let auth = AuthService::new(state.pool(), state.tokens());
    let (user, token) = auth.login(body.email.trim(), &body.password).await?;

    Ok(Json(AuthResponse { user, token }))
}

/// Return the authenticated user.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
