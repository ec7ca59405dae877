//! Site export: document assembly and zip packaging.
//!
//! The export pipeline is read-only with respect to stored state: it merges
//! and renders a website's ordered sections into one HTML document, then
//! packages the document together with the shared uploads directory into a
//! zip archive delivered as `{slug}-export.zip`.

use std::io::{Cursor, Write};
use std::path::Path;

use maud::Markup;
use thiserror::Error;
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::content::effective_content;
use crate::models::ProjectSectionDetail;
use crate::render::{page_document, render_section};

/// Errors that can occur while building an export archive.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Assemble the exported HTML document for a website.
///
/// Sections are sorted by `(position, id)`, merged
/// (defaults ⊕ variant ⊕ custom), rendered by category, and wrapped in the
/// document shell. Pure: no I/O.
#[must_use]
pub fn assemble_document(site_name: &str, sections: &[ProjectSectionDetail]) -> String {
    let mut ordered: Vec<&ProjectSectionDetail> = sections.iter().collect();
    ordered.sort_by_key(|s| (s.position, s.id.as_i32()));

    let fragments: Vec<Markup> = ordered
        .iter()
        .map(|section| {
            let content = effective_content(
                &section.default_data,
                section.variant_data.as_ref(),
                section.custom_data.as_ref(),
            );
            render_section(&section.category_slug, &content)
        })
        .collect();

    page_document(site_name, &fragments).into_string()
}

/// Package an assembled document and the uploads directory into a zip
/// archive, returned as an in-memory buffer.
///
/// The uploads directory is mirrored wholesale under `uploads/` inside the
/// archive; its absence is tolerated silently.
///
/// # Errors
///
/// Returns `ExportError` if a file cannot be read or the archive cannot be
/// written.
pub fn build_export_archive(document: &str, uploads_dir: &Path) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file("index.html", options)?;
    writer.write_all(document.as_bytes())?;

    if uploads_dir.is_dir() {
        for entry in WalkDir::new(uploads_dir) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            // strip_prefix cannot fail for entries under uploads_dir
            let Ok(relative) = entry.path().strip_prefix(uploads_dir) else {
                continue;
            };

            let name = format!("uploads/{}", relative.to_string_lossy());
            writer.start_file(name, options)?;
            writer.write_all(&std::fs::read(entry.path())?)?;
        }
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pagewright_core::{ProjectSectionId, SectionTemplateId, WebsiteId};
    use serde_json::json;
    use std::io::Read;

    fn detail(id: i32, position: i32, title: &str) -> ProjectSectionDetail {
        ProjectSectionDetail {
            id: ProjectSectionId::new(id),
            website_id: WebsiteId::new(1),
            section_id: SectionTemplateId::new(1),
            variant_id: None,
            custom_data: Some(json!({"title": title})),
            position,
            published: false,
            saved_at: Utc::now(),
            section_name: "Hero".to_string(),
            thumbnail: None,
            default_data: json!({"title": "Default", "subtitle": "Sub"}),
            variant_label: None,
            variant_data: None,
            category_slug: "hero".to_string(),
        }
    }

    #[test]
    fn test_assemble_orders_by_position() {
        let sections = vec![
            detail(1, 3, "Third"),
            detail(2, 1, "First"),
            detail(3, 2, "Second"),
        ];

        let document = assemble_document("Site", &sections);

        let first = document.find("First").unwrap();
        let second = document.find("Second").unwrap();
        let third = document.find("Third").unwrap();
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_assemble_breaks_position_ties_by_id() {
        let sections = vec![detail(9, 1, "Later"), detail(2, 1, "Earlier")];

        let document = assemble_document("Site", &sections);
        assert!(document.find("Earlier").unwrap() < document.find("Later").unwrap());
    }

    #[test]
    fn test_assemble_applies_merge() {
        let sections = vec![detail(1, 1, "Custom Title")];

        let document = assemble_document("Site", &sections);
        // Custom overrides the default title; untouched default keys survive.
        assert!(document.contains("Custom Title"));
        assert!(!document.contains("Default<"));
        assert!(document.contains("Sub"));
    }

    #[test]
    fn test_archive_contains_document_and_uploads() {
        let uploads = tempfile::tempdir().unwrap();
        std::fs::write(uploads.path().join("logo.png"), b"png-bytes").unwrap();
        std::fs::create_dir(uploads.path().join("nested")).unwrap();
        std::fs::write(uploads.path().join("nested/pic.jpg"), b"jpg-bytes").unwrap();

        let bytes = build_export_archive("<html></html>", uploads.path()).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.contains(&"index.html".to_string()));
        assert!(names.contains(&"uploads/logo.png".to_string()));
        assert!(names.contains(&"uploads/nested/pic.jpg".to_string()));

        let mut index = String::new();
        archive
            .by_name("index.html")
            .unwrap()
            .read_to_string(&mut index)
            .unwrap();
        assert_eq!(index, "<html></html>");
    }

    #[test]
    fn test_archive_tolerates_missing_uploads_dir() {
        let bytes =
            build_export_archive("<html></html>", Path::new("/definitely/not/there")).unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);
    }
}
