//! In-process [`EntityStore`] used by tests and local runs without PostgreSQL.
//!
//! Enforces the same unique constraints as the migrations, reporting
//! violations with the same constraint names.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use folio_core::content::{ContentKey, SectionContent};
use folio_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::admin_user::{AdminUser, NewAdminUser};
use crate::models::content_section::ContentSection;
use crate::models::message::{Message, NewMessage};
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::store::EntityStore;

const UQ_PROJECTS_SLUG: &str = "uq_projects_slug";

#[derive(Default)]
struct Tables {
    next_id: DbId,
    projects: BTreeMap<DbId, Project>,
    content_sections: BTreeMap<&'static str, ContentSection>,
    admin_users: BTreeMap<DbId, AdminUser>,
    messages: BTreeMap<DbId, Message>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn slug_taken(&self, slug: &str, exclude_id: Option<DbId>) -> bool {
        self.projects
            .values()
            .any(|p| p.slug == slug && Some(p.id) != exclude_id)
    }
}

/// Memory-backed store. Each operation takes the lock once and never holds it
/// across an await point.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an outage: while set, every operation fails with
    /// [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store marked unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables
            .projects
            .values()
            .filter(|p| !featured_only || p.is_featured)
            .cloned()
            .collect();
        projects.sort_by_key(|p| (p.display_order, p.id));
        Ok(projects)
    }

    async fn find_project_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.projects.get(&id).cloned())
    }

    async fn find_project_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.projects.values().find(|p| p.slug == slug).cloned())
    }

    async fn project_slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.slug_taken(slug, exclude_id))
    }

    async fn create_project(&self, input: &NewProject) -> Result<Project, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables.slug_taken(&input.slug, None) {
            return Err(StoreError::DuplicateKey {
                constraint: UQ_PROJECTS_SLUG.into(),
            });
        }

        let now = Utc::now();
        let project = Project {
            id: tables.next_id(),
            title: input.title.clone(),
            slug: input.slug.clone(),
            short_description: input.short_description.clone(),
            detailed_description: input.detailed_description.clone(),
            tech_stack: input.tech_stack.clone(),
            category: input.category.clone(),
            cover_image_url: input.cover_image_url.clone(),
            github_url: input.github_url.clone(),
            live_url: input.live_url.clone(),
            is_featured: input.is_featured,
            display_order: input.display_order,
            readme_content: input.readme_content.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
        slug: &str,
    ) -> Result<Option<Project>, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&id) {
            return Ok(None);
        }
        if tables.slug_taken(slug, Some(id)) {
            return Err(StoreError::DuplicateKey {
                constraint: UQ_PROJECTS_SLUG.into(),
            });
        }

        let Some(project) = tables.projects.get_mut(&id) else {
            return Ok(None);
        };
        input.apply_to(project, slug);
        project.updated_at = Utc::now();
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.tables.write().await.projects.remove(&id).is_some())
    }

    async fn list_content_sections(&self) -> Result<Vec<ContentSection>, StoreError> {
        self.check_available()?;
        // BTreeMap keyed by the key string keeps the same order as `ORDER BY key`.
        Ok(self
            .tables
            .read()
            .await
            .content_sections
            .values()
            .cloned()
            .collect())
    }

    async fn find_content_section(
        &self,
        key: ContentKey,
    ) -> Result<Option<ContentSection>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.content_sections.get(key.as_str()).cloned())
    }

    async fn upsert_content_section(
        &self,
        content: &SectionContent,
    ) -> Result<ContentSection, StoreError> {
        self.check_available()?;
        let key = content.key();
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        let section = tables
            .content_sections
            .entry(key.as_str())
            .and_modify(|s| {
                s.content = content.clone();
                s.updated_at = now;
            })
            .or_insert_with(|| ContentSection {
                key,
                content: content.clone(),
                created_at: now,
                updated_at: now,
            });
        Ok(section.clone())
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.admin_users.values().find(|a| a.email == email).cloned())
    }

    async fn upsert_admin_user(&self, input: &NewAdminUser) -> Result<AdminUser, StoreError> {
        self.check_available()?;
        let now = Utc::now();
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables
            .admin_users
            .values_mut()
            .find(|a| a.email == input.email)
        {
            existing.password_hash = input.password_hash.clone();
            existing.role = input.role.clone();
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let admin = AdminUser {
            id: tables.next_id(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            role: input.role.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.admin_users.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let mut messages: Vec<Message> = tables.messages.values().cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(messages)
    }

    async fn find_message(&self, id: DbId) -> Result<Option<Message>, StoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.messages.get(&id).cloned())
    }

    async fn create_message(&self, input: &NewMessage) -> Result<Message, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let message = Message {
            id: tables.next_id(),
            name: input.name.clone(),
            email: input.email.clone(),
            subject: input.subject.clone(),
            message: input.message.clone(),
            created_at: Utc::now(),
        };
        tables.messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn delete_message(&self, id: DbId) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.tables.write().await.messages.remove(&id).is_some())
    }
}
