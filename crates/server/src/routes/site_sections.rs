//! Placed-section routes nested under `/api/sites/{id}/sections`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;

use pagewright_core::{ProjectSectionId, SectionTemplateId, SectionVariantId, WebsiteId};

use crate::db::ProjectSectionRepository;
use crate::db::project_sections::ProjectSectionPatch;
use crate::error::{AppError, Result};
use crate::middleware::{CurrentUser, authorize_site};
use crate::models::{ProjectSection, ProjectSectionDetail};
use crate::state::AppState;

/// Build the placed-section router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{ps_id}", axum::routing::patch(update).delete(destroy))
}

/// Request body for placing a section.
#[derive(Debug, Deserialize)]
pub struct CreateSectionRequest {
    pub section_id: i32,
    pub variant_id: Option<i32>,
    pub custom_data: Option<Value>,
    #[serde(rename = "order", default)]
    pub position: i32,
}

/// Request body for updating a placed section. Absent fields are unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSectionRequest {
    pub custom_data: Option<Value>,
    #[serde(rename = "order")]
    pub position: Option<i32>,
    pub variant_id: Option<i32>,
    pub published: Option<bool>,
}

/// List a website's placed sections in page order, joined with template,
/// variant, and category display data.
pub async fn list(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ProjectSectionDetail>>> {
    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;

    let sections = ProjectSectionRepository::new(state.pool())
        .list_for_website(website.id)
        .await?;

    Ok(Json(sections))
}

/// Place a section template into the website.
pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<CreateSectionRequest>,
) -> Result<(StatusCode, Json<ProjectSection>)> {
    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;

    let section = ProjectSectionRepository::new(state.pool())
        .create(
            website.id,
            SectionTemplateId::new(body.section_id),
            body.variant_id.map(SectionVariantId::new),
            body.custom_data.as_ref(),
            body.position,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(section)))
}

/// Update a placed section's customization, order, variant, or published
/// flag. Touches `saved_at`.
pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path((id, ps_id)): Path<(i32, i32)>,
    Json(body): Json<UpdateSectionRequest>,
) -> Result<Json<ProjectSection>> {
    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;

    let patch = ProjectSectionPatch {
        custom_data: body.custom_data,
        position: body.position,
        variant_id: body.variant_id.map(SectionVariantId::new),
        published: body.published,
    };

    let section = ProjectSectionRepository::new(state.pool())
        .update(website.id, ProjectSectionId::new(ps_id), patch)
        .await?;

    Ok(Json(section))
}

/// Remove a placed section. Hard delete; no ordering history.
pub async fn destroy(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path((id, ps_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    let website = authorize_site(&state, &user, WebsiteId::new(id)).await?;

    let deleted = ProjectSectionRepository::new(state.pool())
        .delete(website.id, ProjectSectionId::new(ps_id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!(
            "section {ps_id} not found in this website"
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
