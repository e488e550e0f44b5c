//! Project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub detailed_description: Option<String>,
    pub tech_stack: Vec<String>,
    pub category: Option<String>,
    pub cover_image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub readme_content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a project.
///
/// Required fields are optional here so that a missing field produces a
/// validation error naming it rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub title: Option<String>,
    /// Pins the slug instead of deriving it from the title.
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub category: Option<String>,
    pub cover_image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub display_order: i32,
    pub readme_content: Option<String>,
}

/// A validated project ready to insert, with its slug already resolved.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub detailed_description: Option<String>,
    pub tech_stack: Vec<String>,
    pub category: Option<String>,
    pub cover_image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub readme_content: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; absent
/// fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub category: Option<String>,
    pub cover_image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
    pub readme_content: Option<String>,
}

impl UpdateProject {
    /// Apply the present fields onto `project`, setting the resolved `slug`.
    pub fn apply_to(&self, project: &mut Project, slug: &str) {
        project.slug = slug.to_string();
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(v) = &self.short_description {
            project.short_description = v.clone();
        }
        if let Some(v) = &self.detailed_description {
            project.detailed_description = Some(v.clone());
        }
        if let Some(v) = &self.tech_stack {
            project.tech_stack = v.clone();
        }
        if let Some(v) = &self.category {
            project.category = Some(v.clone());
        }
        if let Some(v) = &self.cover_image_url {
            project.cover_image_url = Some(v.clone());
        }
        if let Some(v) = &self.github_url {
            project.github_url = Some(v.clone());
        }
        if let Some(v) = &self.live_url {
            project.live_url = Some(v.clone());
        }
        if let Some(v) = self.is_featured {
            project.is_featured = v;
        }
        if let Some(v) = self.display_order {
            project.display_order = v;
        }
        if let Some(v) = &self.readme_content {
            project.readme_content = Some(v.clone());
        }
    }
}

/// Query parameters for `GET /projects`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProjectFilter {
    /// Only return projects flagged `is_featured`.
    #[serde(default)]
    pub featured: bool,
}
