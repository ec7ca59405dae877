//! Read-only catalog routes for the builder UI.

use axum::{Json, Router, extract::State, routing::get};

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::{SectionCategory, SectionTemplateWithVariants};
use crate::state::AppState;

/// Build the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list_categories))
        .route("/api/sections", get(list_sections))
}

/// List all section categories.
pub async fn list_categories(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<SectionCategory>>> {
    let categories = CatalogRepository::new(state.pool()).list_categories().await?;
    Ok(Json(categories))
}

/// List all section templates with their variants nested.
pub async fn list_sections(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<SectionTemplateWithVariants>>> {
    let sections = CatalogRepository::new(state.pool())
        .list_templates_with_variants()
        .await?;
    Ok(Json(sections))
}
