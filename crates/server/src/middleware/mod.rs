//! Request middleware and extractors.

pub mod auth;

pub use auth::{CurrentUser, RequireAdmin, authorize_site};
