//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{NewProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, short_description, detailed_description, tech_stack, \
                       category, cover_image_url, github_url, live_url, is_featured, \
                       display_order, readme_content, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Fails with a unique violation on `uq_projects_slug` if the slug was
    /// taken after it was resolved.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, slug, short_description, detailed_description, tech_stack, category,
                 cover_image_url, github_url, live_url, is_featured, display_order, readme_content)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.short_description)
            .bind(&input.detailed_description)
            .bind(&input.tech_stack)
            .bind(&input.category)
            .bind(&input.cover_image_url)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(input.is_featured)
            .bind(input.display_order)
            .bind(&input.readme_content)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Whether any project other than `exclude_id` already uses `slug`.
    pub async fn slug_exists(
        pool: &PgPool,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM projects
                WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List projects by `display_order` ascending, ties broken by id.
    pub async fn list(pool: &PgPool, featured_only: bool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1 = false OR is_featured)
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(featured_only)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied; the
    /// slug is always set to the already-resolved `slug`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                slug = $2,
                title = COALESCE($3, title),
                short_description = COALESCE($4, short_description),
                detailed_description = COALESCE($5, detailed_description),
                tech_stack = COALESCE($6, tech_stack),
                category = COALESCE($7, category),
                cover_image_url = COALESCE($8, cover_image_url),
                github_url = COALESCE($9, github_url),
                live_url = COALESCE($10, live_url),
                is_featured = COALESCE($11, is_featured),
                display_order = COALESCE($12, display_order),
                readme_content = COALESCE($13, readme_content),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.detailed_description)
            .bind(&input.tech_stack)
            .bind(&input.category)
            .bind(&input.cover_image_url)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(input.is_featured)
            .bind(input.display_order)
            .bind(&input.readme_content)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
