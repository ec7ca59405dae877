//! Admin catalog management: categories, section templates, variants.
//!
//! Template and variant creation are multipart endpoints: the content
//! payload (`default_data` / `variant_data`) arrives as a JSON text field,
//! alongside an optional `thumbnail` file.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State, multipart::Field},
    http::StatusCode,
    routing::{delete, get, post},
};
use serde::Deserialize;
use serde_json::Value;

use pagewright_core::{CategoryId, SectionTemplateId, SectionVariantId, Slug};

use crate::content::parse_content_field;
use crate::db::CatalogRepository;
use crate::error::{AppError, FieldError, Result};
use crate::middleware::RequireAdmin;
use crate::models::{SectionCategory, SectionTemplate, SectionTemplateWithVariants, SectionVariant};
use crate::state::AppState;
use crate::uploads::{StoredUpload, save_upload};

/// Build the admin catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", post(create_category))
        .route("/sections", get(list_sections).post(create_section))
        .route("/sections/{id}", delete(delete_section))
        .route("/sections/{id}/variants", post(create_variant))
        .route(
            "/sections/{id}/variants/{variant_id}",
            delete(delete_variant),
        )
}

/// Request body for category creation.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    /// Derived from `name` when omitted.
    pub slug: Option<String>,
}

/// Create a section category.
///
/// # Errors
///
/// Returns a validation error for a missing name or malformed slug, `409`
/// for a duplicate slug.
pub async fn create_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<SectionCategory>)> {
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

    let category = CatalogRepository::new(state.pool())
        .create_category(body.name.trim(), &slug)
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// List all section templates with their variants nested.
pub async fn list_sections(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<SectionTemplateWithVariants>>> {
    let sections = CatalogRepository::new(state.pool())
        .list_templates_with_variants()
        .await?;
    Ok(Json(sections))
}

/// Create a section template from a multipart form.
///
/// Fields: `name`, `category_id`, `default_data` (JSON text), optional
/// `thumbnail` file.
///
/// # Errors
///
/// Returns a validation error for missing/invalid fields (including
/// "Invalid JSON in default_data"), `409` for a duplicate slug.
pub async fn create_section(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SectionTemplate>)> {
    let mut name: Option<String> = None;
    let mut category_id: Option<CategoryId> = None;
    let mut default_data: Option<Value> = None;
    let mut thumbnail: Option<StoredUpload> = None;

    while let Some(field) = next_field(&mut multipart).await? {
        let Some(field_name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        match field_name.as_str() {
            "name" => name = Some(read_text(field, "name").await?),
            "category_id" => {
                let raw = read_text(field, "category_id").await?;
                let id = raw.trim().parse::<i32>().map_err(|_| {
                    AppError::Validation(vec![FieldError::new(
                        "category_id",
                        "category_id must be an integer",
                    )])
                })?;
                category_id = Some(CategoryId::new(id));
            }
            "default_data" => {
                let raw = read_text(field, "default_data").await?;
                default_data = Some(parse_content_field("default_data", &raw)?);
            }
            "thumbnail" => thumbnail = Some(store_thumbnail(&state, field).await?),
            _ => {}
        }
    }

    let name = name.filter(|n| !n.trim().is_empty());
    let mut errors = Vec::new();
    if name.is_none() {
        errors.push(FieldError::new("name", "name is required"));
    }
    if category_id.is_none() {
        errors.push(FieldError::new("category_id", "category_id is required"));
    }
    if default_data.is_none() {
        errors.push(FieldError::new("default_data", "default_data is required"));
    }
    let (Some(name), Some(category_id), Some(default_data)) = (name, category_id, default_data)
    else {
        return Err(AppError::Validation(errors));
    };

    let slug = Slug::slugify(&name);
    let template = CatalogRepository::new(state.pool())
        .create_template(
            name.trim(),
            &slug,
            category_id,
            thumbnail.as_ref().map(|t| t.url.as_str()),
            &default_data,
            admin.id,
        )
        .await?;

    tracing::info!(template_id = %template.id, "section template created");

    Ok((StatusCode::CREATED, Json(template)))
}

/// Delete a section template.
///
/// # Errors
///
/// Returns `404` if the template doesn't exist, `409` if it is still placed
/// in a website.
pub async fn delete_section(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let deleted = CatalogRepository::new(state.pool())
        .delete_template(SectionTemplateId::new(id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!("section template {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Create a variant of a template from a multipart form.
///
/// Fields: `label`, `variant_data` (JSON text), optional `thumbnail` file.
///
/// # Errors
///
/// Returns a validation error for missing/invalid fields (including
/// "Invalid JSON in variant_data"), `404` for an unknown template.
pub async fn create_variant(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SectionVariant>)> {
    let mut label: Option<String> = None;
    let mut variant_data: Option<Value> = None;
    let mut thumbnail: Option<StoredUpload> = None;

    while let Some(field) = next_field(&mut multipart).await? {
        let Some(field_name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        match field_name.as_str() {
            "label" => label = Some(read_text(field, "label").await?),
            "variant_data" => {
                let raw = read_text(field, "variant_data").await?;
                variant_data = Some(parse_content_field("variant_data", &raw)?);
            }
            "thumbnail" => thumbnail = Some(store_thumbnail(&state, field).await?),
            _ => {}
        }
    }

    let label = label.filter(|l| !l.trim().is_empty());
    let mut errors = Vec::new();
    if label.is_none() {
        errors.push(FieldError::new("label", "label is required"));
    }
    if variant_data.is_none() {
        errors.push(FieldError::new("variant_data", "variant_data is required"));
    }
    let (Some(label), Some(variant_data)) = (label, variant_data) else {
        return Err(AppError::Validation(errors));
    };

    let variant = CatalogRepository::new(state.pool())
        .create_variant(
            SectionTemplateId::new(id),
            label.trim(),
            thumbnail.as_ref().map(|t| t.url.as_str()),
            &variant_data,
        )
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound(format!("section template {id} not found"))
            }
            other => other.into(),
        })?;

    Ok((StatusCode::CREATED, Json(variant)))
}

/// Delete a variant of a template.
///
/// # Errors
///
/// Returns `404` if the variant doesn't exist under this template.
pub async fn delete_variant(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path((id, variant_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    let deleted = CatalogRepository::new(state.pool())
        .delete_variant(
            SectionTemplateId::new(id),
            SectionVariantId::new(variant_id),
        )
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!("variant {variant_id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Multipart helpers
// =============================================================================

/// Advance to the next multipart field.
async fn next_field(multipart: &mut Multipart) -> Result<Option<Field<'_>>> {
    multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))
}

/// Read a text field.
async fn read_text(field: Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("could not read field {name}: {e}")))
}

/// Store an uploaded thumbnail file.
async fn store_thumbnail(state: &AppState, field: Field<'_>) -> Result<StoredUpload> {
    let original = field.file_name().unwrap_or("thumbnail.png").to_owned();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("could not read thumbnail: {e}")))?;

    save_upload(state.uploads_dir(), &original, &bytes).await
}
