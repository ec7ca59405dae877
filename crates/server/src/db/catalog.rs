//! Section catalog repository: categories, templates, variants.

use std::collections::HashMap;

use serde_json::Value;
use sqlx::PgPool;

use pagewright_core::{CategoryId, SectionTemplateId, SectionVariantId, Slug, UserId};

use super::RepositoryError;
use crate::models::{
    SectionCategory, SectionTemplate, SectionTemplateWithVariants, SectionVariant,
};

const TEMPLATE_COLUMNS: &str =
    "id, name, slug, category_id, thumbnail, default_data, created_by, created_at";
const VARIANT_COLUMNS: &str = "id, section_id, label, thumbnail, variant_data, created_at";

/// Repository for the section catalog.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// List all section categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<SectionCategory>, RepositoryError> {
        let categories = sqlx::query_as::<_, SectionCategory>(
            "SELECT id, name, slug FROM section_categories ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Create a new section category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_category(
        &self,
        name: &str,
        slug: &Slug,
    ) -> Result<SectionCategory, RepositoryError> {
        let category = sqlx::query_as::<_, SectionCategory>(
            "INSERT INTO section_categories (name, slug) VALUES ($1, $2) RETURNING id, name, slug",
        )
        .bind(name)
        .bind(slug.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("category slug already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(category)
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Get a section template by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_template(
        &self,
        id: SectionTemplateId,
    ) -> Result<Option<SectionTemplate>, RepositoryError> {
        let template = sqlx::query_as::<_, SectionTemplate>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM sections WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(template)
    }

    /// List all templates with their variants nested.
    ///
    /// Two queries and an in-memory group-by; no N+1.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the queries fail.
    pub async fn list_templates_with_variants(
        &self,
    ) -> Result<Vec<SectionTemplateWithVariants>, RepositoryError> {
        let templates = sqlx::query_as::<_, SectionTemplate>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM sections ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        let variants = sqlx::query_as::<_, SectionVariant>(&format!(
            "SELECT {VARIANT_COLUMNS} FROM section_variants ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        let mut grouped: HashMap<SectionTemplateId, Vec<SectionVariant>> = HashMap::new();
        for variant in variants {
            grouped.entry(variant.section_id).or_default().push(variant);
        }

        Ok(templates
            .into_iter()
            .map(|template| {
                let variants = grouped.remove(&template.id).unwrap_or_default();
                SectionTemplateWithVariants { template, variants }
            })
            .collect())
    }

    /// Create a new section template.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists in the
    /// category, or if the category doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_template(
        &self,
        name: &str,
        slug: &Slug,
        category_id: CategoryId,
        thumbnail: Option<&str>,
        default_data: &Value,
        created_by: UserId,
    ) -> Result<SectionTemplate, RepositoryError> {
        let template = sqlx::query_as::<_, SectionTemplate>(&format!(
            r"
            INSERT INTO sections (name, slug, category_id, thumbnail, default_data, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {TEMPLATE_COLUMNS}
            "
        ))
        .bind(name)
        .bind(slug.as_str())
        .bind(category_id.as_i32())
        .bind(thumbnail)
        .bind(default_data)
        .bind(created_by.as_i32())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return RepositoryError::Conflict(
                        "section slug already exists in this category".to_owned(),
                    );
                }
                if db_err.is_foreign_key_violation() {
                    return RepositoryError::Conflict("unknown category".to_owned());
                }
            }
            RepositoryError::Database(e)
        })?;

        Ok(template)
    }

    /// Delete a section template.
    ///
    /// # Returns
    ///
    /// Returns `true` if the template was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the template is still placed in
    /// a website. Returns `RepositoryError::Database` for other errors.
    pub async fn delete_template(&self, id: SectionTemplateId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_foreign_key_violation()
                {
                    return RepositoryError::Conflict(
                        "section template is in use by a website".to_owned(),
                    );
                }
                RepositoryError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    // Variants
    // =========================================================================

    /// Create a new variant of a template.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the parent template doesn't
    /// exist. Returns `RepositoryError::Database` for other database errors.
    pub async fn create_variant(
        &self,
        section_id: SectionTemplateId,
        label: &str,
        thumbnail: Option<&str>,
        variant_data: &Value,
    ) -> Result<SectionVariant, RepositoryError> {
        let variant = sqlx::query_as::<_, SectionVariant>(&format!(
            r"
            INSERT INTO section_variants (section_id, label, thumbnail, variant_data)
            VALUES ($1, $2, $3, $4)
            RETURNING {VARIANT_COLUMNS}
            "
        ))
        .bind(section_id.as_i32())
        .bind(label)
        .bind(thumbnail)
        .bind(variant_data)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            RepositoryError::Database(e)
        })?;

        Ok(variant)
    }

    /// Delete a variant of a template.
    ///
    /// Scoped to the parent template so a mistyped URL cannot delete another
    /// template's variant.
    ///
    /// # Returns
    ///
    /// Returns `true` if the variant was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_variant(
        &self,
        section_id: SectionTemplateId,
        variant_id: SectionVariantId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM section_variants WHERE id = $1 AND section_id = $2")
            .bind(variant_id.as_i32())
            .bind(section_id.as_i32())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
