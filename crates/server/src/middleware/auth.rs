//! Authentication extractors and ownership guards.
//!
//! Requests authenticate with a signed token in the `x-auth-token` header.
//! The extractors verify the token and load the user row, so handlers always
//! see the stored role, not the role at token-issue time.

use axum::{extract::FromRequestParts, http::request::Parts};

use pagewright_core::{UserId, WebsiteId};

use crate::db::users::UserRepository;
use crate::db::websites::WebsiteRepository;
use crate::error::AppError;
use crate::models::{User, Website};
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Header carrying the auth token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Extractor that requires an authenticated user.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentUser(user): CurrentUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Auth(AuthError::MissingToken))?;

        let claims = state.tokens().verify(token)?;

        let user = UserRepository::new(state.pool())
            .get_by_id(UserId::new(claims.sub))
            .await?
            .ok_or_else(|| AppError::Unauthorized("account no longer exists".to_string()))?;

        Ok(Self(user))
    }
}

/// Extractor that requires an authenticated admin.
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("admin access required".to_string()));
        }

        Ok(Self(user))
    }
}

/// Load a website and check that the requester may act on it.
///
/// Runs before any merge/render/export step on `:id`-scoped site routes.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the website doesn't exist, and
/// `AppError::Forbidden` unless the requester owns it or is an admin.
pub async fn authorize_site(
    state: &AppState,
    user: &User,
    website_id: WebsiteId,
) -> Result<Website, AppError> {
    let website = WebsiteRepository::new(state.pool())
        .get(website_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("website {website_id} not found")))?;

    if !website.accessible_by(user) {
        return Err(AppError::Forbidden(
            "you do not have access to this website".to_string(),
        ));
    }

    Ok(website)
}
