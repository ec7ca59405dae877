//! Database operations for the Pagewright `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `users` - Account identity, role, and password hash
//! - `section_categories` - Rendering categories (`header`, `hero`, ...)
//! - `sections` - Reusable section templates with JSONB default content
//! - `section_variants` - Named content presets layered on templates
//! - `websites` - Per-user projects with unique slugs
//! - `project_sections` - Ordered template instances placed in a website
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p pagewright-cli -- migrate
//! ```

pub mod catalog;
pub mod project_sections;
pub mod users;
pub mod websites;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use project_sections::ProjectSectionRepository;
pub use users::UserRepository;
pub use websites::WebsiteRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate slug).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
