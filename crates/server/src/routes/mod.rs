//! HTTP route handlers for the builder API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (database)
//!
//! # Auth
//! POST /api/auth/register       - Create account, returns token
//! POST /api/auth/login          - Login, returns token
//! GET  /api/auth/me             - Current user from token
//!
//! # Catalog (authenticated)
//! GET  /api/categories          - List section categories
//! GET  /api/sections            - List templates with nested variants
//!
//! # Admin catalog (admin only)
//! POST   /api/admin/categories                        - Create category
//! GET    /api/admin/sections                          - List templates with variants
//! POST   /api/admin/sections                          - Create template (multipart)
//! DELETE /api/admin/sections/{id}                     - Delete template
//! POST   /api/admin/sections/{id}/variants            - Create variant (multipart)
//! DELETE /api/admin/sections/{id}/variants/{variant}  - Delete variant
//!
//! # Sites (owner or admin)
//! GET    /api/sites                         - List own websites (admin: all)
//! POST   /api/sites                         - Create website
//! GET    /api/sites/{id}                    - Website detail
//! PATCH  /api/sites/{id}                    - Rename website
//! DELETE /api/sites/{id}                    - Delete website
//! POST   /api/sites/{id}/publish            - Publish website + sections
//! GET    /api/sites/{id}/export             - Download zip export
//! GET    /api/sites/{id}/sections           - Ordered placed sections
//! POST   /api/sites/{id}/sections           - Place a section
//! PATCH  /api/sites/{id}/sections/{ps_id}   - Update a placed section
//! DELETE /api/sites/{id}/sections/{ps_id}   - Remove a placed section
//!
//! # Uploads
//! POST /api/uploads             - Store a file (multipart)
//! GET  /uploads/*               - Serve stored files (static)
//! ```

pub mod admin_catalog;
pub mod auth;
pub mod catalog;
pub mod site_sections;
pub mod sites;
pub mod uploads;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/admin", admin_catalog::router())
        .merge(catalog::router())
        .nest("/api/sites", sites::router())
        .route("/api/uploads", post(uploads::upload))
}
