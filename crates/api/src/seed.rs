//! Idempotent bootstrap data for a fresh deployment.
//!
//! Run through the `folio-seed` binary, never from the request path. Running
//! it twice leaves the store in the same state as running it once, except
//! that the admin password hash is re-salted.

use std::collections::BTreeMap;

use folio_core::content::{
    AboutContent, BackgroundsContent, Banner, BannersContent, CallToAction, ContactContent,
    HeroContent, SectionContent, SkillsContent, SocialContent,
};
use folio_core::roles::ROLE_OWNER;
use folio_core::types::DbId;
use folio_db::models::admin_user::NewAdminUser;
use folio_db::models::project::NewProject;
use folio_db::{EntityStore, StoreError};

use crate::auth::password::hash_password;
use crate::config::SeedConfig;

/// Errors that abort a seeding run.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to hash admin password: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a seeding run changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_id: DbId,
    /// Sample projects inserted; ones whose slug already existed are skipped.
    pub projects_inserted: usize,
    pub sections_upserted: usize,
}

/// Upsert the admin account, insert missing sample projects, and write every
/// default content section.
pub async fn run_seed(store: &dyn EntityStore, config: &SeedConfig) -> Result<SeedReport, SeedError> {
    let password_hash = hash_password(&config.admin_password)
        .map_err(|e| SeedError::PasswordHash(e.to_string()))?;

    let admin = store
        .upsert_admin_user(&NewAdminUser {
            email: config.admin_email.trim().to_string(),
            password_hash,
            role: ROLE_OWNER.to_string(),
        })
        .await?;
    tracing::info!(admin_id = admin.id, "Admin user seeded");

    let mut projects_inserted = 0;
    for project in sample_projects() {
        if store.find_project_by_slug(&project.slug).await?.is_some() {
            tracing::debug!(slug = %project.slug, "Sample project already present");
            continue;
        }
        let created = store.create_project(&project).await?;
        tracing::info!(project_id = created.id, slug = %created.slug, "Sample project seeded");
        projects_inserted += 1;
    }

    let sections = default_sections();
    for content in &sections {
        store.upsert_content_section(content).await?;
        tracing::info!(key = %content.key(), "Content section seeded");
    }

    Ok(SeedReport {
        admin_id: admin.id,
        projects_inserted,
        sections_upserted: sections.len(),
    })
}

/// The three sample projects shown on a fresh site.
pub fn sample_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "E-Commerce Platform".into(),
            slug: "e-commerce-platform".into(),
            short_description: "A full-featured e-commerce platform with payment integration"
                .into(),
            detailed_description: Some(
                "Product catalog, shopping cart, Stripe payment processing, and an admin \
                 dashboard."
                    .into(),
            ),
            tech_stack: vec!["React".into(), "Node.js".into(), "PostgreSQL".into(), "Stripe".into()],
            category: Some("E-Commerce".into()),
            cover_image_url: Some("https://via.placeholder.com/400x300?text=E-Commerce".into()),
            github_url: Some("https://github.com/example/ecommerce".into()),
            live_url: Some("https://ecommerce.example.com".into()),
            is_featured: true,
            display_order: 1,
            readme_content: Some(
                "# E-Commerce Platform\n\n## Features\n- Product catalog with search and filtering\n\
                 - Shopping cart management\n- Payment integration with Stripe\n- Admin dashboard\n"
                    .into(),
            ),
        },
        NewProject {
            title: "Real Estate Management System".into(),
            slug: "real-estate-management".into(),
            short_description: "A property management and listing platform".into(),
            detailed_description: Some(
                "Property listings, client management, and document handling for agents and \
                 brokers."
                    .into(),
            ),
            tech_stack: vec![
                "React".into(),
                "TypeScript".into(),
                "Firebase".into(),
                "Google Maps API".into(),
            ],
            category: Some("Real Estate".into()),
            cover_image_url: Some("https://via.placeholder.com/400x300?text=Real+Estate".into()),
            github_url: Some("https://github.com/example/realestate".into()),
            live_url: Some("https://realestate.example.com".into()),
            is_featured: true,
            display_order: 2,
            readme_content: Some(
                "# Real Estate Management System\n\n## Features\n- Property listings\n\
                 - Client management\n- Document upload\n- Advanced search filters\n"
                    .into(),
            ),
        },
        NewProject {
            title: "Task Management App".into(),
            slug: "task-management-app".into(),
            short_description: "A collaborative task and project management application".into(),
            detailed_description: Some(
                "Team collaboration tool for task tracking, sprint planning, and progress \
                 reporting."
                    .into(),
            ),
            tech_stack: vec![
                "Vue.js".into(),
                "Node.js".into(),
                "PostgreSQL".into(),
                "WebSocket".into(),
            ],
            category: Some("Web Apps".into()),
            cover_image_url: Some("https://via.placeholder.com/400x300?text=Task+Manager".into()),
            github_url: Some("https://github.com/example/taskmanager".into()),
            live_url: None,
            is_featured: false,
            display_order: 3,
            readme_content: Some(
                "# Task Management App\n\n## Key Features\n- Real-time task updates\n\
                 - Sprint planning\n- Progress tracking\n"
                    .into(),
            ),
        },
    ]
}

/// Placeholder copy for every content key.
pub fn default_sections() -> Vec<SectionContent> {
    let social: BTreeMap<String, String> = [
        ("github", "https://github.com/example"),
        ("linkedin", "https://linkedin.com/in/example"),
        ("twitter", "https://twitter.com/example"),
    ]
    .into_iter()
    .map(|(name, url)| (name.to_string(), url.to_string()))
    .collect();

    vec![
        SectionContent::Hero(HeroContent {
            title: "Hi, I'm a Full Stack Developer".into(),
            subtitle: "Building fast, reliable web applications".into(),
            ctas: vec![
                CallToAction {
                    text: "View My Work".into(),
                    href: "/projects".into(),
                },
                CallToAction {
                    text: "Get in Touch".into(),
                    href: "/contact".into(),
                },
            ],
            background_image: None,
        }),
        SectionContent::About(AboutContent {
            summary: "A full-stack developer with experience across modern web technologies."
                .into(),
            highlights: vec![
                "Built 20+ web applications".into(),
                "Comfortable from database to UI".into(),
                "Open source contributor".into(),
            ],
            background_image: None,
        }),
        SectionContent::Skills(SkillsContent {
            frontend: vec!["React".into(), "TypeScript".into(), "Tailwind CSS".into()],
            backend: vec!["Rust".into(), "Node.js".into(), "PostgreSQL".into()],
            devops: vec!["Docker".into(), "GitHub Actions".into(), "Nginx".into()],
            background_image: None,
        }),
        SectionContent::Contact(ContactContent {
            email: "hello@example.com".into(),
            phone: "+1 555 0100".into(),
            address: "Remote".into(),
            whatsapp_number: "15550100".into(),
        }),
        SectionContent::Social(SocialContent { links: social }),
        SectionContent::Banners(BannersContent {
            items: vec![
                Banner {
                    image_url: "https://via.placeholder.com/1200x400?text=Banner+1".into(),
                    alt: "Portfolio Banner 1".into(),
                    link_url: Some("/projects".into()),
                    order: 1,
                },
                Banner {
                    image_url: "https://via.placeholder.com/1200x400?text=Banner+2".into(),
                    alt: "Portfolio Banner 2".into(),
                    link_url: Some("/about".into()),
                    order: 2,
                },
            ],
        }),
        SectionContent::Backgrounds(BackgroundsContent::default()),
    ]
}

#[cfg(test)]
mod tests {
    use folio_core::content::ContentKey;
    use folio_core::slug::validate_slug;
    use folio_db::MemoryStore;

    use super::*;
    use crate::auth::password::verify_password;

    fn config() -> SeedConfig {
        SeedConfig {
            admin_email: "owner@example.com".into(),
            admin_password: "seed-password".into(),
        }
    }

    #[test]
    fn sample_slugs_satisfy_invariant() {
        for project in sample_projects() {
            assert!(validate_slug(&project.slug).is_ok(), "{}", project.slug);
        }
    }

    #[test]
    fn default_sections_cover_every_key() {
        let keys: Vec<ContentKey> = default_sections().iter().map(|c| c.key()).collect();
        assert_eq!(keys, ContentKey::ALL.to_vec());
    }

    #[tokio::test]
    async fn seeds_empty_store() {
        let store = MemoryStore::new();
        let report = run_seed(&store, &config()).await.unwrap();

        assert_eq!(report.projects_inserted, 3);
        assert_eq!(report.sections_upserted, ContentKey::ALL.len());
        assert_eq!(store.list_projects(false).await.unwrap().len(), 3);
        assert_eq!(store.list_projects(true).await.unwrap().len(), 2);
        assert_eq!(
            store.list_content_sections().await.unwrap().len(),
            ContentKey::ALL.len()
        );

        let admin = store
            .find_admin_by_email("owner@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, ROLE_OWNER);
        assert!(verify_password("seed-password", &admin.password_hash).unwrap());
    }

    #[tokio::test]
    async fn second_run_inserts_no_duplicates() {
        let store = MemoryStore::new();
        let first = run_seed(&store, &config()).await.unwrap();
        let second = run_seed(&store, &config()).await.unwrap();

        assert_eq!(second.projects_inserted, 0);
        assert_eq!(first.admin_id, second.admin_id);
        assert_eq!(store.list_projects(false).await.unwrap().len(), 3);
    }
}
