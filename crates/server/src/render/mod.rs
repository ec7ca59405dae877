//! Section rendering.
//!
//! Maps a category slug and an effective content object to an HTML fragment,
//! and wraps ordered fragments in the exported document shell.
//!
//! The closed set of category slugs is modeled as [`SectionKind`], so adding
//! a category is a compile-checked exhaustive match. An unrecognized slug
//! falls through to a generic title/content block, never an error.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, so stored
//! content lands in the page escaped. Rendering is pure: the same
//! `(slug, content)` pair always yields byte-identical markup.

mod sections;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::Value;

/// The closed set of section categories the renderer knows how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Hero,
    About,
    Services,
    Pricing,
    Faq,
    Timeline,
    Testimonials,
    Contact,
    Footer,
}

impl SectionKind {
    /// Every known kind, in no particular order. Used by tests and seeding.
    pub const ALL: [Self; 10] = [
        Self::Header,
        Self::Hero,
        Self::About,
        Self::Services,
        Self::Pricing,
        Self::Faq,
        Self::Timeline,
        Self::Testimonials,
        Self::Contact,
        Self::Footer,
    ];

    /// Resolve a category slug to a kind. Unknown slugs yield `None` and are
    /// rendered by the generic fallback.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "header" => Some(Self::Header),
            "hero" => Some(Self::Hero),
            "about" => Some(Self::About),
            "services" => Some(Self::Services),
            "pricing" => Some(Self::Pricing),
            "faq" => Some(Self::Faq),
            "timeline" => Some(Self::Timeline),
            "testimonials" => Some(Self::Testimonials),
            "contact" => Some(Self::Contact),
            "footer" => Some(Self::Footer),
            _ => None,
        }
    }

    /// The canonical slug for this kind.
    #[must_use]
    pub const fn as_slug(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Services => "services",
            Self::Pricing => "pricing",
            Self::Faq => "faq",
            Self::Timeline => "timeline",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }
}

/// Render one section fragment from its category slug and effective content.
///
/// Missing optional fields yield empty sub-fragments, never an error.
#[must_use]
pub fn render_section(category_slug: &str, content: &Value) -> Markup {
    match SectionKind::from_slug(category_slug) {
        Some(SectionKind::Header) => sections::header(content),
        Some(SectionKind::Hero) => sections::hero(content),
        Some(SectionKind::About) => sections::about(content),
        Some(SectionKind::Services) => sections::services(content),
        Some(SectionKind::Pricing) => sections::pricing(content),
        Some(SectionKind::Faq) => sections::faq(content),
        Some(SectionKind::Timeline) => sections::timeline(content),
        Some(SectionKind::Testimonials) => sections::testimonials(content),
        Some(SectionKind::Contact) => sections::contact(content),
        Some(SectionKind::Footer) => sections::footer(content),
        None => sections::generic(content),
    }
}

/// Wrap ordered section fragments in the exported document shell: doctype,
/// head with the Tailwind CDN script, body.
#[must_use]
pub fn page_document(title: &str, fragments: &[Markup]) -> Markup {
    let joined: Markup = PreEscaped(fragments.iter().map(|f| f.0.as_str()).collect::<String>());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body {
                (joined)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slug_roundtrip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_slug(kind.as_slug()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert_eq!(SectionKind::from_slug("mystery"), None);
        assert_eq!(SectionKind::from_slug(""), None);
        // Dispatch is exact, not case-insensitive.
        assert_eq!(SectionKind::from_slug("Hero"), None);
    }

    #[test]
    fn test_render_is_deterministic() {
        let content = json!({"title": "Welcome", "subtitle": "To the site"});
        let a = render_section("hero", &content).into_string();
        let b = render_section("hero", &content).into_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let content = json!({"title": "Odd", "content": "Body text"});
        let markup = render_section("not-a-category", &content).into_string();
        assert!(markup.contains("Odd"));
        assert!(markup.contains("Body text"));
    }

    #[test]
    fn test_every_kind_renders_empty_content() {
        // Absent fields must yield empty fragments, never a panic.
        let empty = json!({});
        for kind in SectionKind::ALL {
            let markup = render_section(kind.as_slug(), &empty).into_string();
            assert!(
                markup.contains("<section") || markup.contains("<header") || markup.contains("<footer"),
                "{} produced no element",
                kind.as_slug()
            );
        }
    }

    #[test]
    fn test_content_is_escaped() {
        let content = json!({"title": "<script>alert(1)</script>"});
        let markup = render_section("hero", &content).into_string();
        assert!(!markup.contains("<script>alert(1)</script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_optional_cta_renders_conditionally() {
        let without = render_section("hero", &json!({"title": "T"})).into_string();
        assert!(!without.contains("<a"));

        let with = render_section(
            "hero",
            &json!({"title": "T", "ctaButton": {"label": "Go", "url": "/go"}}),
        )
        .into_string();
        assert!(with.contains("<a"));
        assert!(with.contains("/go"));
    }

    #[test]
    fn test_page_document_shell() {
        let fragments = vec![render_section("hero", &json!({"title": "One"}))];
        let doc = page_document("My Site", &fragments).into_string();

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>My Site</title>"));
        assert!(doc.contains("cdn.tailwindcss.com"));
        assert!(doc.contains("One"));
    }
}
