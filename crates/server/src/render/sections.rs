//! Per-category fragment renderers.
//!
//! Each function binds the fields its category expects from the effective
//! content object and interpolates them into Tailwind-convention markup.
//! Absent fields render as empty sub-fragments.

use maud::{Markup, html};
use serde_json::Value;

/// A string field, if present.
fn text<'a>(content: &'a Value, key: &str) -> Option<&'a str> {
    content.get(key).and_then(Value::as_str)
}

/// An array field, or the empty slice.
fn items<'a>(content: &'a Value, key: &str) -> &'a [Value] {
    content
        .get(key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// A `{label, url}` object rendered as a call-to-action link.
fn cta_link(value: &Value, classes: &str) -> Markup {
    let label = text(value, "label").unwrap_or("Learn more");
    let url = text(value, "url").unwrap_or("#");

    html! {
        a class=(classes) href=(url) { (label) }
    }
}

pub fn header(content: &Value) -> Markup {
    html! {
        header class="flex items-center justify-between px-8 py-4 bg-white shadow" {
            @if let Some(logo) = text(content, "logo") {
                img class="h-10" src=(logo) alt=(text(content, "title").unwrap_or(""));
            }
            @if let Some(title) = text(content, "title") {
                span class="text-xl font-bold" { (title) }
            }
            nav class="flex items-center gap-6" {
                @for item in items(content, "menuItems") {
                    a class="text-gray-700 hover:text-gray-900"
                        href=(text(item, "url").unwrap_or("#")) {
                        (text(item, "label").unwrap_or(""))
                    }
                }
                @if let Some(cta) = content.get("ctaButton") {
                    (cta_link(cta, "px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-700"))
                }
            }
        }
    }
}

pub fn hero(content: &Value) -> Markup {
    let background = text(content, "backgroundImage")
        .map(|url| format!("background-image:url('{url}');background-size:cover"));

    html! {
        section class="py-24 px-8 text-center bg-gray-900 text-white" style=[background] {
            @if let Some(title) = text(content, "title") {
                h1 class="text-5xl font-bold mb-4" { (title) }
            }
            @if let Some(subtitle) = text(content, "subtitle") {
                p class="text-xl text-gray-300 mb-8" { (subtitle) }
            }
            @if let Some(cta) = content.get("ctaButton") {
                (cta_link(cta, "inline-block px-8 py-3 rounded-lg bg-blue-600 text-white text-lg hover:bg-blue-700"))
            }
        }
    }
}

pub fn about(content: &Value) -> Markup {
    html! {
        section class="py-16 px-8 max-w-4xl mx-auto" {
            @if let Some(title) = text(content, "title") {
                h2 class="text-3xl font-bold mb-6" { (title) }
            }
            @if let Some(image) = text(content, "image") {
                img class="rounded-lg mb-6" src=(image) alt=(text(content, "title").unwrap_or(""));
            }
            @if let Some(body) = text(content, "body") {
                p class="text-lg text-gray-600 leading-relaxed" { (body) }
            }
        }
    }
}

pub fn services(content: &Value) -> Markup {
    html! {
        section class="py-16 px-8 bg-gray-50" {
            @if let Some(title) = text(content, "title") {
                h2 class="text-3xl font-bold text-center mb-12" { (title) }
            }
            div class="grid gap-8 md:grid-cols-3 max-w-6xl mx-auto" {
                @for item in items(content, "items") {
                    div class="p-6 bg-white rounded-lg shadow" {
                        @if let Some(icon) = text(item, "icon") {
                            img class="h-12 mb-4" src=(icon) alt="";
                        }
                        h3 class="text-xl font-semibold mb-2" {
                            (text(item, "title").unwrap_or(""))
                        }
                        p class="text-gray-600" {
                            (text(item, "description").unwrap_or(""))
                        }
                    }
                }
            }
        }
    }
}

pub fn pricing(content: &Value) -> Markup {
    html! {
        section class="py-16 px-8" {
            @if let Some(title) = text(content, "title") {
                h2 class="text-3xl font-bold text-center mb-12" { (title) }
            }
            div class="grid gap-8 md:grid-cols-3 max-w-6xl mx-auto" {
                @for plan in items(content, "plans") {
                    div class="p-8 border rounded-xl flex flex-col" {
                        h3 class="text-xl font-semibold" { (text(plan, "name").unwrap_or("")) }
                        p class="text-4xl font-bold my-4" {
                            (text(plan, "price").unwrap_or(""))
                            @if let Some(period) = text(plan, "period") {
                                span class="text-base font-normal text-gray-500" { "/" (period) }
                            }
                        }
                        ul class="space-y-2 mb-8 flex-1" {
                            @for feature in items(plan, "features") {
                                li class="text-gray-600" { (feature.as_str().unwrap_or("")) }
                            }
                        }
                        @if let Some(cta) = plan.get("ctaButton") {
                            (cta_link(cta, "block text-center px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-700"))
                        }
                    }
                }
            }
        }
    }
}

pub fn faq(content: &Value) -> Markup {
    html! {
        section class="py-16 px-8 max-w-3xl mx-auto" {
            @if let Some(title) = text(content, "title") {
                h2 class="text-3xl font-bold text-center mb-12" { (title) }
            }
            div class="space-y-4" {
                @for item in items(content, "items") {
                    details class="p-4 border rounded-lg" {
                        summary class="font-semibold cursor-pointer" {
                            (text(item, "question").unwrap_or(""))
                        }
                        p class="mt-2 text-gray-600" {
                            (text(item, "answer").unwrap_or(""))
                        }
                    }
                }
            }
        }
    }
}

pub fn timeline(content: &Value) -> Markup {
    html! {
        section class="py-16 px-8 max-w-3xl mx-auto" {
            @if let Some(title) = text(content, "title") {
                h2 class="text-3xl font-bold text-center mb-12" { (title) }
            }
            ol class="border-l-2 border-blue-600 space-y-8 pl-8" {
                @for event in items(content, "events") {
                    li {
                        @if let Some(date) = text(event, "date") {
                            time class="text-sm text-gray-500" { (date) }
                        }
                        h3 class="text-lg font-semibold" { (text(event, "title").unwrap_or("")) }
                        p class="text-gray-600" { (text(event, "description").unwrap_or("")) }
                    }
                }
            }
        }
    }
}

pub fn testimonials(content: &Value) -> Markup {
    html! {
        section class="py-16 px-8 bg-gray-50" {
            @if let Some(title) = text(content, "title") {
                h2 class="text-3xl font-bold text-center mb-12" { (title) }
            }
            div class="grid gap-8 md:grid-cols-2 max-w-5xl mx-auto" {
                @for item in items(content, "items") {
                    blockquote class="p-6 bg-white rounded-lg shadow" {
                        p class="text-lg italic mb-4" {
                            "\u{201c}" (text(item, "quote").unwrap_or("")) "\u{201d}"
                        }
                        footer class="text-sm text-gray-500" {
                            (text(item, "author").unwrap_or(""))
                            @if let Some(role) = text(item, "role") {
                                ", " (role)
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn contact(content: &Value) -> Markup {
    html! {
        section class="py-16 px-8 text-center" {
            @if let Some(title) = text(content, "title") {
                h2 class="text-3xl font-bold mb-6" { (title) }
            }
            @if let Some(email) = text(content, "email") {
                p class="text-lg" {
                    a class="text-blue-600 hover:underline" href={ "mailto:" (email) } { (email) }
                }
            }
            @if let Some(phone) = text(content, "phone") {
                p class="text-lg text-gray-600" { (phone) }
            }
            @if let Some(address) = text(content, "address") {
                p class="text-gray-500" { (address) }
            }
        }
    }
}

pub fn footer(content: &Value) -> Markup {
    html! {
        footer class="py-8 px-8 bg-gray-900 text-gray-400" {
            div class="flex items-center justify-between max-w-6xl mx-auto" {
                @if let Some(copyright) = text(content, "copyright") {
                    span { (copyright) }
                }
                nav class="flex gap-4" {
                    @for link in items(content, "links") {
                        a class="hover:text-white" href=(text(link, "url").unwrap_or("#")) {
                            (text(link, "label").unwrap_or(""))
                        }
                    }
                }
            }
        }
    }
}

/// Fallback for category slugs the renderer doesn't recognize: a plain
/// title/content block.
pub fn generic(content: &Value) -> Markup {
    html! {
        section class="py-16 px-8 max-w-4xl mx-auto" {
            @if let Some(title) = text(content, "title") {
                h2 class="text-3xl font-bold mb-6" { (title) }
            }
            @if let Some(body) = text(content, "content") {
                p class="text-lg text-gray-600" { (body) }
            }
        }
    }
}
