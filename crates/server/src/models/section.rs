//! Section catalog domain types: categories, templates, variants.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use pagewright_core::{CategoryId, SectionTemplateId, SectionVariantId, Slug, UserId};

/// A rendering category (e.g. `header`, `hero`, `pricing`).
///
/// The category slug selects the rendering branch in [`crate::render`].
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SectionCategory {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Unique slug driving renderer dispatch.
    pub slug: Slug,
}

/// A reusable page-building-block template with default content.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SectionTemplate {
    /// Unique template ID.
    pub id: SectionTemplateId,
    /// Display name.
    pub name: String,
    /// Slug, unique within the template's category.
    pub slug: Slug,
    /// Rendering category.
    pub category_id: CategoryId,
    /// Optional thumbnail path under the uploads directory.
    pub thumbnail: Option<String>,
    /// Default content (free-form JSON per category).
    pub default_data: Value,
    /// Admin who created the template.
    pub created_by: UserId,
    /// When the template was created.
    pub created_at: DateTime<Utc>,
}

/// A named alternate content preset layered on top of a template's defaults.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SectionVariant {
    /// Unique variant ID.
    pub id: SectionVariantId,
    /// Parent template.
    pub section_id: SectionTemplateId,
    /// Display label (e.g. "Dark", "Centered").
    pub label: String,
    /// Optional thumbnail path under the uploads directory.
    pub thumbnail: Option<String>,
    /// Content overriding subsets of the template's defaults.
    pub variant_data: Value,
    /// When the variant was created.
    pub created_at: DateTime<Utc>,
}

/// A template together with its variants, as listed by the catalog routes.
#[derive(Debug, Clone, Serialize)]
pub struct SectionTemplateWithVariants {
    /// The template itself.
    #[serde(flatten)]
    pub template: SectionTemplate,
    /// All variants of the template.
    pub variants: Vec<SectionVariant>,
}
