//! The storage contract the API runs against, and its PostgreSQL implementation.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::content::{ContentKey, SectionContent};
use folio_core::types::DbId;

use crate::error::StoreError;
use crate::models::admin_user::{AdminUser, NewAdminUser};
use crate::models::content_section::ContentSection;
use crate::models::message::{Message, NewMessage};
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::repositories::{AdminUserRepo, ContentSectionRepo, MessageRepo, ProjectRepo};
use crate::DbPool;

/// Durable storage for projects, content sections, admin users, and messages.
///
/// Implementations must enforce uniqueness of project slugs, content keys,
/// and admin emails, rejecting a conflicting write with
/// [`StoreError::DuplicateKey`] instead of overwriting.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    // --- Projects ---
    async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, StoreError>;
    async fn find_project_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError>;
    async fn find_project_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError>;
    /// Whether a project other than `exclude_id` holds `slug`.
    async fn project_slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, StoreError>;
    async fn create_project(&self, input: &NewProject) -> Result<Project, StoreError>;
    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
        slug: &str,
    ) -> Result<Option<Project>, StoreError>;
    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError>;

    // --- Content sections ---
    async fn list_content_sections(&self) -> Result<Vec<ContentSection>, StoreError>;
    async fn find_content_section(
        &self,
        key: ContentKey,
    ) -> Result<Option<ContentSection>, StoreError>;
    /// Replace the document stored under `content.key()`, creating it if absent.
    async fn upsert_content_section(
        &self,
        content: &SectionContent,
    ) -> Result<ContentSection, StoreError>;

    // --- Admin users ---
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, StoreError>;
    async fn upsert_admin_user(&self, input: &NewAdminUser) -> Result<AdminUser, StoreError>;

    // --- Messages ---
    async fn list_messages(&self) -> Result<Vec<Message>, StoreError>;
    async fn find_message(&self, id: DbId) -> Result<Option<Message>, StoreError>;
    async fn create_message(&self, input: &NewMessage) -> Result<Message, StoreError>;
    async fn delete_message(&self, id: DbId) -> Result<bool, StoreError>;
}

/// The store as shared through application state.
pub type SharedStore = Arc<dyn EntityStore>;

/// [`EntityStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool, featured_only).await?)
    }

    async fn find_project_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_project_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_slug(&self.pool, slug).await?)
    }

    async fn project_slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, StoreError> {
        Ok(ProjectRepo::slug_exists(&self.pool, slug, exclude_id).await?)
    }

    async fn create_project(&self, input: &NewProject) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
        slug: &str,
    ) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, id, input, slug).await?)
    }

    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn list_content_sections(&self) -> Result<Vec<ContentSection>, StoreError> {
        ContentSectionRepo::list(&self.pool)
            .await?
            .into_iter()
            .map(|row| ContentSection::try_from(row).map_err(StoreError::from))
            .collect()
    }

    async fn find_content_section(
        &self,
        key: ContentKey,
    ) -> Result<Option<ContentSection>, StoreError> {
        ContentSectionRepo::find_by_key(&self.pool, key)
            .await?
            .map(|row| ContentSection::try_from(row).map_err(StoreError::from))
            .transpose()
    }

    async fn upsert_content_section(
        &self,
        content: &SectionContent,
    ) -> Result<ContentSection, StoreError> {
        let document = content.to_value()?;
        let row = ContentSectionRepo::upsert(&self.pool, content.key(), &document).await?;
        Ok(ContentSection::try_from(row)?)
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, StoreError> {
        Ok(AdminUserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn upsert_admin_user(&self, input: &NewAdminUser) -> Result<AdminUser, StoreError> {
        Ok(AdminUserRepo::upsert(&self.pool, input).await?)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        Ok(MessageRepo::list(&self.pool).await?)
    }

    async fn find_message(&self, id: DbId) -> Result<Option<Message>, StoreError> {
        Ok(MessageRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_message(&self, input: &NewMessage) -> Result<Message, StoreError> {
        Ok(MessageRepo::create(&self.pool, input).await?)
    }

    async fn delete_message(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(MessageRepo::delete(&self.pool, id).await?)
    }
}
