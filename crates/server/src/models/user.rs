//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pagewright_core::{Email, UserId, UserRole};

/// A user account (domain type).
///
/// The password hash never leaves the `db` layer; this struct is safe to
/// serialize into API responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: Email,
    /// Permission level.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this user may manage the catalog and act on any website.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
