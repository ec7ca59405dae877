//! Project section repository: placed section instances inside a website.

use serde_json::Value;
use sqlx::PgPool;

use pagewright_core::{ProjectSectionId, SectionTemplateId, SectionVariantId, WebsiteId};

use super::RepositoryError;
use crate::models::{ProjectSection, ProjectSectionDetail};

const SECTION_COLUMNS: &str =
    "id, website_id, section_id, variant_id, custom_data, position, published, saved_at";

/// Fields accepted by [`ProjectSectionRepository::update`].
///
/// `None` leaves the stored value unchanged.
#[derive(Debug, Default)]
pub struct ProjectSectionPatch {
    /// Replace the per-instance content overrides.
    pub custom_data: Option<Value>,
    /// Move the instance to a new page position.
    pub position: Option<i32>,
    /// Switch the variant preset.
    pub variant_id: Option<SectionVariantId>,
    /// Flip the published flag.
    pub published: Option<bool>,
}

/// Repository for project section database operations.
pub struct ProjectSectionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectSectionRepository<'a> {
    /// Create a new project section repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a website's sections joined with template, variant, and category
    /// display data, in page order.
    ///
    /// Ordered by `position` with `id` as the tie-breaker, so equal positions
    /// keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_website(
        &self,
        website_id: WebsiteId,
    ) -> Result<Vec<ProjectSectionDetail>, RepositoryError> {
        let sections = sqlx::query_as::<_, ProjectSectionDetail>(
            r"
            SELECT ps.id, ps.website_id, ps.section_id, ps.variant_id, ps.custom_data,
                   ps.position, ps.published, ps.saved_at,
                   s.name AS section_name, s.thumbnail, s.default_data,
                   v.label AS variant_label, v.variant_data,
                   c.slug AS category_slug
            FROM project_sections ps
            JOIN sections s ON s.id = ps.section_id
            JOIN section_categories c ON c.id = s.category_id
            LEFT JOIN section_variants v ON v.id = ps.variant_id
            WHERE ps.website_id = $1
            ORDER BY ps.position, ps.id
            ",
        )
        .bind(website_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(sections)
    }

    /// Place a template instance into a website.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the template or variant doesn't
    /// exist. Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        website_id: WebsiteId,
        section_id: SectionTemplateId,
        variant_id: Option<SectionVariantId>,
        custom_data: Option<&Value>,
        position: i32,
    ) -> Result<ProjectSection, RepositoryError> {
        let section = sqlx::query_as::<_, ProjectSection>(&format!(
            r"
            INSERT INTO project_sections (website_id, section_id, variant_id, custom_data, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SECTION_COLUMNS}
            "
        ))
        .bind(website_id.as_i32())
        .bind(section_id.as_i32())
        .bind(variant_id.map(|v| v.as_i32()))
        .bind(custom_data)
        .bind(position)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::Conflict("unknown section template or variant".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(section)
    }

    /// Partially update a section instance, touching `saved_at`.
    ///
    /// Scoped to the owning website so one website's route can never mutate
    /// another website's sections.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the instance doesn't exist in
    /// this website. Returns `RepositoryError::Conflict` if a new variant
    /// reference is unknown. Returns `RepositoryError::Database` otherwise.
    pub async fn update(
        &self,
        website_id: WebsiteId,
        id: ProjectSectionId,
        patch: ProjectSectionPatch,
    ) -> Result<ProjectSection, RepositoryError> {
        sqlx::query_as::<_, ProjectSection>(&format!(
            r"
            UPDATE project_sections
            SET custom_data = COALESCE($3, custom_data),
                position = COALESCE($4, position),
                variant_id = COALESCE($5, variant_id),
                published = COALESCE($6, published),
                saved_at = now()
            WHERE id = $1 AND website_id = $2
            RETURNING {SECTION_COLUMNS}
            "
        ))
        .bind(id.as_i32())
        .bind(website_id.as_i32())
        .bind(patch.custom_data)
        .bind(patch.position)
        .bind(patch.variant_id.map(|v| v.as_i32()))
        .bind(patch.published)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::Conflict("unknown variant".to_owned());
            }
            RepositoryError::Database(e)
        })?
        .ok_or(RepositoryError::NotFound)
    }

    /// Hard-delete a section instance.
    ///
    /// # Returns
    ///
    /// Returns `true` if the instance was deleted, `false` if it didn't exist
    /// in this website.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(
        &self,
        website_id: WebsiteId,
        id: ProjectSectionId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM project_sections WHERE id = $1 AND website_id = $2")
            .bind(id.as_i32())
            .bind(website_id.as_i32())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
