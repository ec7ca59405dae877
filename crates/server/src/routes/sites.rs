//! Website routes: CRUD, publish, export.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;

use pagewright_core::{Slug, WebsiteId};

use crate::db::{ProjectSectionRepository, WebsiteRepository};
use crate::error::{AppError, FieldError, Result};
use crate::export::{assemble_document, build_export_archive};
use crate::middleware::{CurrentUser, authorize_site};
use crate::models::Website;
use crate::state::AppState;

use super::site_sections;

/// Build the sites router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).patch(rename).delete(destroy))
        .route("/{id}/publish", post(publish))
        .route("/{id}/export", get(export))
        .nest("/{id}/sections", site_sections::router())
}

/// Request body for website creation.
#[derive(Debug, Deserialize)]
pub struct CreateWebsiteRequest {
    pub name: String,
    /// Derived from `name` when omitted.
    pub slug: Option<String>,
}

/// Request body for renaming a website.
#[derive(Debug, Deserialize)]
pub struct UpdateWebsiteRequest {
    pub name: String,
}

/// List the requester's websites. Admins see every website.
pub async fn list(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Website>>> {
    let repo = WebsiteRepository::new(state.pool());
    let websites = if user.is_admin() {
        repo.list_all().await?
    } else {
        repo.list_for_user(user.id).await?
    };

    Ok(Json(websites))
}

/// Create a website.
///
/// The slug pre-check turns routine duplicates into a validation error; the
/// unique index still backs it up under concurrent creation, surfacing as a
/// conflict instead of a raw database error.
///
/// # Errors
///
/// Returns a validation error for a missing name, malformed slug, or taken
/// slug.
pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<CreateWebsiteRequest>,
) -> Result<(StatusCode, Json<Website>)> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation(vec![FieldError::new(
            "name",
            "name is required",
        )]));
    }

    let slug = match &body.slug {
        Some(raw) => Slug::parse(raw.trim())
            .map_err(|e| AppError::Validation(vec![FieldError::new("slug", e.to_string())]))?,
        None => Slug::slugify(&body.name),
    };

    let repo = WebsiteRepository::new(state.pool());
    if repo.slug_exists(&slug).await? {
        return Err(AppError::Validation(vec![FieldError::new(
            "slug",
            "slug already in use",
        )]));
    }

    let website = repo.create(user.id, body.name.trim(), &slug).await?;

    tracing::info!(website_id = %website.id, slug = %website.slug, "website created");

    Ok((StatusCode::CREATED, Json(website)))
}

/// Website detail.
pub async fn show(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Website>> {
    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;
    Ok(Json(website))
}

/// Rename a website.
pub async fn rename(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateWebsiteRequest>,
) -> Result<Json<Website>> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation(vec![FieldError::new(
            "name",
            "name is required",
        )]));
    }

    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;
    let website = WebsiteRepository::new(state.pool())
        .rename(website.id, body.name.trim())
        .await?;

    Ok(Json(website))
}

/// Delete a website and its placed sections.
pub async fn destroy(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;
    WebsiteRepository::new(state.pool())
        .delete(website.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Publish a website: stamps `published_at` and flips every placed
/// section's published flag in one transaction.
pub async fn publish(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Website>> {
    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;
    let website = WebsiteRepository::new(state.pool())
        .publish(website.id)
        .await?;

    tracing::info!(website_id = %website.id, "website published");

    Ok(Json(website))
}

/// Export a website as a zip archive: the assembled `index.html` plus a
/// mirror of the uploads directory.
///
/// Read-only with respect to stored state.
pub async fn export(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;

    let sections = ProjectSectionRepository::new(state.pool())
        .list_for_website(website.id)
        .await?;

    let document = assemble_document(&website.name, &sections);
    let archive = build_export_archive(&document, state.uploads_dir())
        .map_err(|e| AppError::Internal(format!("failed to build export archive: {e}")))?;

    tracing::info!(
        website_id = %website.id,
        sections = sections.len(),
        bytes = archive.len(),
        "website exported"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}-export.zip\"", website.slug),
        ),
    ];

    Ok((headers, archive))
}
