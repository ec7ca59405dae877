//! Placed section instances inside a website.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use pagewright_core::{ProjectSectionId, SectionTemplateId, SectionVariantId, WebsiteId};

/// One placed, ordered instance of a section template inside a website.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectSection {
    /// Unique instance ID.
    pub id: ProjectSectionId,
    /// Owning website.
    pub website_id: WebsiteId,
    /// The template this instance was placed from.
    pub section_id: SectionTemplateId,
    /// Optional variant preset.
    pub variant_id: Option<SectionVariantId>,
    /// Per-instance content overrides.
    pub custom_data: Option<Value>,
    /// Page order (`order` on the wire). Not necessarily contiguous; used
    /// only for sorting.
    #[serde(rename = "order")]
    pub position: i32,
    /// Whether the instance is live on the published site.
    pub published: bool,
    /// Last time the instance was saved.
    pub saved_at: DateTime<Utc>,
}

/// A project section joined with its template, variant, and category display
/// data, as consumed by the builder UI and the export assembler.
///
/// Rows are always fetched `ORDER BY position, id` so the page sequence is
/// stable even when positions collide.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectSectionDetail {
    /// Unique instance ID.
    pub id: ProjectSectionId,
    /// Owning website.
    pub website_id: WebsiteId,
    /// The template this instance was placed from.
    pub section_id: SectionTemplateId,
    /// Optional variant preset.
    pub variant_id: Option<SectionVariantId>,
    /// Per-instance content overrides.
    pub custom_data: Option<Value>,
    /// Page order (`order` on the wire).
    #[serde(rename = "order")]
    pub position: i32,
    /// Whether the instance is live on the published site.
    pub published: bool,
    /// Last time the instance was saved.
    pub saved_at: DateTime<Utc>,
    /// Template display name.
    pub section_name: String,
    /// Template thumbnail, if any.
    pub thumbnail: Option<String>,
    /// Template default content.
    pub default_data: Value,
    /// Variant label, if a variant is selected.
    pub variant_label: Option<String>,
    /// Variant content overrides, if a variant is selected.
    pub variant_data: Option<Value>,
    /// Category slug driving renderer dispatch.
    pub category_slug: String,
}
