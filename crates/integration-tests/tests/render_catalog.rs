//! Integration tests for the section renderer across the full category set.

use serde_json::json;

use pagewright_server::render::{SectionKind, page_document, render_section};

#[test]
fn test_every_category_renders_representative_content() {
    let samples = [
        (
            "header",
            json!({
                "title": "Acme",
                "menuItems": [
                    {"label": "Home", "url": "/"},
                    {"label": "Pricing", "url": "/pricing"}
                ],
                "ctaButton": {"label": "Sign up", "url": "/signup"}
            }),
            vec!["Acme", "Home", "/pricing", "Sign up"],
        ),
        (
            "hero",
            json!({
                "title": "Build faster",
                "subtitle": "Ship today",
                "backgroundImage": "/uploads/bg.jpg",
                "ctaButton": {"label": "Start", "url": "/start"}
            }),
            vec!["Build faster", "Ship today", "/uploads/bg.jpg", "Start"],
        ),
        (
            "about",
            json!({"title": "About us", "body": "We make sites."}),
            vec!["About us", "We make sites."],
        ),
        (
            "services",
            json!({
                "title": "What we do",
                "items": [{"title": "Design", "description": "Pretty pages"}]
            }),
            vec!["What we do", "Design", "Pretty pages"],
        ),
        (
            "pricing",
            json!({
                "title": "Plans",
                "plans": [{
                    "name": "Pro",
                    "price": "$29",
                    "period": "month",
                    "features": ["Unlimited sites"],
                    "ctaButton": {"label": "Buy", "url": "/buy"}
                }]
            }),
            vec!["Plans", "Pro", "$29", "month", "Unlimited sites", "Buy"],
        ),
        (
            "faq",
            json!({
                "title": "FAQ",
                "items": [{"question": "Why?", "answer": "Because."}]
            }),
            vec!["FAQ", "Why?", "Because."],
        ),
        (
            "timeline",
            json!({
                "title": "History",
                "events": [{"date": "2020", "title": "Founded", "description": "In a garage"}]
            }),
            vec!["History", "2020", "Founded", "In a garage"],
        ),
        (
            "testimonials",
            json!({
                "title": "Loved by teams",
                "items": [{"quote": "Great tool", "author": "Sam", "role": "CTO"}]
            }),
            vec!["Loved by teams", "Great tool", "Sam", "CTO"],
        ),
        (
            "contact",
            json!({"title": "Reach us", "email": "hi@acme.test", "phone": "555-0100"}),
            vec!["Reach us", "hi@acme.test", "555-0100"],
        ),
        (
            "footer",
            json!({
                "copyright": "© 2026 Acme",
                "links": [{"label": "Terms", "url": "/terms"}]
            }),
            vec!["© 2026 Acme", "Terms", "/terms"],
        ),
    ];

    for (slug, content, expected) in samples {
        assert!(
            SectionKind::from_slug(slug).is_some(),
            "{slug} should be a known category"
        );
        let markup = render_section(slug, &content).into_string();
        for needle in expected {
            assert!(markup.contains(needle), "{slug}: missing {needle:?}");
        }
    }
}

#[test]
fn test_unknown_category_never_panics() {
    for slug in ["", "HERO", "carousel", "über-section"] {
        let markup = render_section(slug, &json!({"title": "T"})).into_string();
        assert!(markup.contains("T"));
    }
}

#[test]
fn test_rendering_same_input_twice_is_byte_identical() {
    let content = json!({
        "title": "Stable",
        "menuItems": [{"label": "A", "url": "/a"}]
    });

    for kind in SectionKind::ALL {
        let a = render_section(kind.as_slug(), &content).into_string();
        let b = render_section(kind.as_slug(), &content).into_string();
        assert_eq!(a, b, "{} not deterministic", kind.as_slug());
    }
}

#[test]
fn test_document_shell_wraps_fragments_in_order() {
    let fragments = vec![
        render_section("header", &json!({"title": "Top"})),
        render_section("footer", &json!({"copyright": "Bottom"})),
    ];

    let document = page_document("Shell", &fragments).into_string();
    let top = document.find("Top").expect("header fragment");
    let bottom = document.find("Bottom").expect("footer fragment");
    assert!(top < bottom);
    assert!(document.contains("<title>Shell</title>"));
}
