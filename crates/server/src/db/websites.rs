//! Website repository for database operations.

use sqlx::PgPool;

use pagewright_core::{Slug, UserId, WebsiteId};

use super::RepositoryError;
use crate::models::Website;

const WEBSITE_COLUMNS: &str = "id, user_id, name, slug, created_at, published_at";

/// Repository for website database operations.
pub struct WebsiteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WebsiteRepository<'a> {
    /// Create a new website repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a website by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: WebsiteId) -> Result<Option<Website>, RepositoryError> {
        let website = sqlx::query_as::<_, Website>(&format!(
            "SELECT {WEBSITE_COLUMNS} FROM websites WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(website)
    }

    /// List websites owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Website>, RepositoryError> {
        let websites = sqlx::query_as::<_, Website>(&format!(
            "SELECT {WEBSITE_COLUMNS} FROM websites WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(websites)
    }

    /// List every website, newest first. Admin-only callers.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Website>, RepositoryError> {
        let websites = sqlx::query_as::<_, Website>(&format!(
            "SELECT {WEBSITE_COLUMNS} FROM websites ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(websites)
    }

    /// Whether a slug is already taken.
    ///
    /// The unique index on `websites.slug` is authoritative; this pre-check
    /// exists so routine duplicates surface as a friendly validation error
    /// instead of a constraint round-trip.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn slug_exists(&self, slug: &Slug) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM websites WHERE slug = $1)",
        )
        .bind(slug.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Create a new website.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is already in use.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        user_id: UserId,
        name: &str,
        slug: &Slug,
    ) -> Result<Website, RepositoryError> {
        let website = sqlx::query_as::<_, Website>(&format!(
            "INSERT INTO websites (user_id, name, slug) VALUES ($1, $2, $3) RETURNING {WEBSITE_COLUMNS}"
        ))
        .bind(user_id.as_i32())
        .bind(name)
        .bind(slug.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("slug already in use".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(website)
    }

    /// Rename a website.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the website doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn rename(&self, id: WebsiteId, name: &str) -> Result<Website, RepositoryError> {
        sqlx::query_as::<_, Website>(&format!(
            "UPDATE websites SET name = $2 WHERE id = $1 RETURNING {WEBSITE_COLUMNS}"
        ))
        .bind(id.as_i32())
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete a website and (via cascade) its project sections.
    ///
    /// # Returns
    ///
    /// Returns `true` if the website was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: WebsiteId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM websites WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Publish a website: stamp `published_at` and flip every owned project
    /// section's published flag, in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the website doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn publish(&self, id: WebsiteId) -> Result<Website, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let website = sqlx::query_as::<_, Website>(&format!(
            "UPDATE websites SET published_at = now() WHERE id = $1 RETURNING {WEBSITE_COLUMNS}"
        ))
        .bind(id.as_i32())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        sqlx::query("UPDATE project_sections SET published = TRUE WHERE website_id = $1")
            .bind(id.as_i32())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(website)
    }
}
