//! Shared helpers for Pagewright integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::Utc;
use serde_json::Value;

use pagewright_core::{ProjectSectionId, SectionTemplateId, SectionVariantId, WebsiteId};
use pagewright_server::models::ProjectSectionDetail;

/// Build a joined section row the way the repository would return it.
#[must_use]
pub fn section_detail(
    id: i32,
    website_id: i32,
    position: i32,
    category_slug: &str,
    default_data: Value,
) -> ProjectSectionDetail {
    ProjectSectionDetail {
        id: ProjectSectionId::new(id),
        website_id: WebsiteId::new(website_id),
        section_id: SectionTemplateId::new(1),
        variant_id: None,
        custom_data: None,
        position,
        published: false,
        saved_at: Utc::now(),
        section_name: "Test Section".to_string(),
        thumbnail: None,
        default_data,
        variant_label: None,
        variant_data: None,
        category_slug: category_slug.to_string(),
    }
}

/// Attach a variant's overrides to a row.
#[must_use]
pub fn with_variant(mut detail: ProjectSectionDetail, variant_data: Value) -> ProjectSectionDetail {
    detail.variant_id = Some(SectionVariantId::new(1));
    detail.variant_label = Some("Variant".to_string());
    detail.variant_data = Some(variant_data);
    detail
}

/// Attach per-instance customization to a row.
#[must_use]
pub fn with_custom(mut detail: ProjectSectionDetail, custom_data: Value) -> ProjectSectionDetail {
    detail.custom_data = Some(custom_data);
    detail
}
