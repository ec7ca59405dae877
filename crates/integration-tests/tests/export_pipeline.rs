//! Integration tests for the merge → render → assemble → archive pipeline.

use std::io::{Cursor, Read};

use serde_json::json;

use pagewright_integration_tests::{section_detail, with_custom, with_variant};
use pagewright_server::export::{assemble_document, build_export_archive};

// =============================================================================
// Document Assembly
// =============================================================================

#[test]
fn test_fragments_appear_in_position_order() {
    let sections = vec![
        section_detail(1, 1, 3, "hero", json!({"title": "Closing"})),
        section_detail(2, 1, 1, "header", json!({"title": "Masthead"})),
        section_detail(3, 1, 2, "about", json!({"title": "Middle"})),
    ];

    let document = assemble_document("Ordered Site", &sections);

    let masthead = document.find("Masthead").expect("header missing");
    let middle = document.find("Middle").expect("about missing");
    let closing = document.find("Closing").expect("hero missing");
    assert!(masthead < middle);
    assert!(middle < closing);
}

#[test]
fn test_document_only_contains_given_site_rows() {
    // The repository scopes rows by website; the assembler must not invent
    // content beyond what it was handed.
    let site_a = vec![
        section_detail(1, 1, 1, "hero", json!({"title": "Alpha Hero"})),
        section_detail(2, 1, 2, "footer", json!({"copyright": "Alpha Inc"})),
    ];
    let site_b = vec![section_detail(3, 2, 1, "hero", json!({"title": "Beta Hero"}))];

    let document_a = assemble_document("Alpha", &site_a);
    let document_b = assemble_document("Beta", &site_b);

    assert!(document_a.contains("Alpha Hero"));
    assert!(document_a.contains("Alpha Inc"));
    assert!(!document_a.contains("Beta Hero"));

    assert!(document_b.contains("Beta Hero"));
    assert!(!document_b.contains("Alpha Hero"));
}

#[test]
fn test_merge_precedence_flows_through_to_markup() {
    let base = section_detail(
        1,
        1,
        1,
        "hero",
        json!({"title": "Default Title", "subtitle": "Kept Subtitle"}),
    );
    let section = with_custom(
        with_variant(base, json!({"title": "Variant Title"})),
        json!({"title": "Custom Title"}),
    );

    let document = assemble_document("Site", &[section]);

    // Custom wins over variant and default; untouched keys survive.
    assert!(document.contains("Custom Title"));
    assert!(document.contains("Kept Subtitle"));
    assert!(!document.contains("Default Title"));
    assert!(!document.contains("Variant Title"));
}

#[test]
fn test_variant_wins_when_no_customization() {
    let section = with_variant(
        section_detail(1, 1, 1, "hero", json!({"title": "Default Title"})),
        json!({"title": "Variant Title"}),
    );

    let document = assemble_document("Site", &[section]);
    assert!(document.contains("Variant Title"));
    assert!(!document.contains("Default Title"));
}

#[test]
fn test_unknown_category_gets_generic_block() {
    let section = section_detail(
        1,
        1,
        1,
        "holograms",
        json!({"title": "Mystery", "content": "Still rendered"}),
    );

    let document = assemble_document("Site", &[section]);
    assert!(document.contains("Mystery"));
    assert!(document.contains("Still rendered"));
}

#[test]
fn test_empty_site_still_produces_document_shell() {
    let document = assemble_document("Empty Site", &[]);

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<title>Empty Site</title>"));
    assert!(document.contains("cdn.tailwindcss.com"));
}

// =============================================================================
// Archive Packaging
// =============================================================================

#[test]
fn test_archive_mirrors_uploads_directory() {
    let uploads = tempfile::tempdir().expect("tempdir");
    std::fs::write(uploads.path().join("banner.png"), b"banner").expect("write");
    std::fs::create_dir(uploads.path().join("gallery")).expect("mkdir");
    std::fs::write(uploads.path().join("gallery/one.jpg"), b"one").expect("write");

    let sections = vec![section_detail(1, 1, 1, "hero", json!({"title": "Hi"}))];
    let document = assemble_document("Site", &sections);
    let bytes = build_export_archive(&document, uploads.path()).expect("archive");

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("read archive");
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_string())
        .collect();

    assert!(names.contains(&"index.html".to_string()));
    assert!(names.contains(&"uploads/banner.png".to_string()));
    assert!(names.contains(&"uploads/gallery/one.jpg".to_string()));

    let mut index = String::new();
    archive
        .by_name("index.html")
        .expect("index.html")
        .read_to_string(&mut index)
        .expect("read index");
    assert_eq!(index, document);
}

#[test]
fn test_archive_without_uploads_directory() {
    let document = assemble_document("Site", &[]);
    let bytes = build_export_archive(&document, std::path::Path::new("/no/such/dir"))
        .expect("archive without uploads");

    let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("read archive");
    assert_eq!(archive.len(), 1);
}

#[test]
fn test_export_is_deterministic_for_same_rows() {
    let sections = vec![
        section_detail(1, 1, 2, "footer", json!({"copyright": "Acme"})),
        section_detail(2, 1, 1, "hero", json!({"title": "Hello"})),
    ];

    let a = assemble_document("Site", &sections);
    let b = assemble_document("Site", &sections);
    assert_eq!(a, b);
}
