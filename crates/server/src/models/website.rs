//! Website domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pagewright_core::{Slug, UserId, WebsiteId};

use super::User;

/// A website project owned by a user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Website {
    /// Unique website ID.
    pub id: WebsiteId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Globally unique URL slug; also names the export archive.
    pub slug: Slug,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// Set when the website was last published; `None` for drafts.
    pub published_at: Option<DateTime<Utc>>,
}

impl Website {
    /// Whether a user may read or mutate this website: its owner, or any
    /// admin. Every `:id`-scoped site route goes through this check.
    #[must_use]
    pub fn accessible_by(&self, user: &User) -> bool {
        self.user_id == user.id || user.is_admin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pagewright_core::{Email, UserRole};

    fn user(id: i32, role: UserRole) -> User {
        User {
            id: UserId::new(id),
            name: "Test".to_string(),
            email: Email::parse("test@example.com").unwrap(),
            role,
            created_at: Utc::now(),
        }
    }

    fn website(owner: i32) -> Website {
        Website {
            id: WebsiteId::new(1),
            user_id: UserId::new(owner),
            name: "Site".to_string(),
            slug: Slug::parse("site").unwrap(),
            created_at: Utc::now(),
            published_at: None,
        }
    }

    #[test]
    fn test_owner_has_access() {
        assert!(website(7).accessible_by(&user(7, UserRole::Standard)));
    }

    #[test]
    fn test_non_owner_is_denied() {
        assert!(!website(7).accessible_by(&user(8, UserRole::Standard)));
    }

    #[test]
    fn test_admin_always_has_access() {
        assert!(website(7).accessible_by(&user(8, UserRole::Admin)));
    }
}
