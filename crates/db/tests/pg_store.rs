//! Integration tests for [`PgStore`] against a real PostgreSQL database.
//!
//! Each test gets a fresh database with the crate's migrations applied, so
//! these need `DATABASE_URL` pointing at a server the test user can create
//! databases on.

use assert_matches::assert_matches;
use folio_core::content::{CallToAction, ContentKey, HeroContent, SectionContent};
use folio_db::models::admin_user::NewAdminUser;
use folio_db::models::message::NewMessage;
use folio_db::models::project::{NewProject, UpdateProject};
use folio_db::{EntityStore, PgStore, StoreError};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, slug: &str, display_order: i32, is_featured: bool) -> NewProject {
    NewProject {
        title: title.to_string(),
        slug: slug.to_string(),
        short_description: format!("{title} in brief"),
        detailed_description: Some(format!("{title} in depth")),
        tech_stack: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        category: Some("backend".to_string()),
        cover_image_url: None,
        github_url: Some(format!("https://github.com/example/{slug}")),
        live_url: None,
        is_featured,
        display_order,
        readme_content: None,
    }
}

async fn slugs(store: &PgStore, featured_only: bool) -> Vec<String> {
    store
        .list_projects(featured_only)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect()
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_then_find_by_id_and_slug(pool: PgPool) {
    let store = PgStore::new(pool);
    let created = store
        .create_project(&new_project("Folio", "folio", 0, false))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.tech_stack, ["Rust", "PostgreSQL"]);
    assert_eq!(created.created_at, created.updated_at);

    let by_id = store.find_project_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.slug, "folio");
    let by_slug = store.find_project_by_slug("folio").await.unwrap().unwrap();
    assert_eq!(by_slug.id, created.id);

    assert!(store.find_project_by_id(created.id + 1000).await.unwrap().is_none());
    assert!(store.find_project_by_slug("missing").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_slug_insert_names_the_constraint(pool: PgPool) {
    let store = PgStore::new(pool);
    store
        .create_project(&new_project("First", "shared", 0, false))
        .await
        .unwrap();

    let result = store
        .create_project(&new_project("Second", "shared", 1, false))
        .await;
    assert_matches!(
        result,
        Err(StoreError::DuplicateKey { constraint }) if constraint == "uq_projects_slug"
    );
    assert_eq!(slugs(&store, false).await, ["shared"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn slug_exists_honours_excluded_id(pool: PgPool) {
    let store = PgStore::new(pool);
    let owner = store
        .create_project(&new_project("Owner", "taken", 0, false))
        .await
        .unwrap();
    let other = store
        .create_project(&new_project("Other", "other", 0, false))
        .await
        .unwrap();

    assert!(store.project_slug_exists("taken", None).await.unwrap());
    assert!(!store.project_slug_exists("taken", Some(owner.id)).await.unwrap());
    assert!(store.project_slug_exists("taken", Some(other.id)).await.unwrap());
    assert!(!store.project_slug_exists("free", None).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_orders_by_display_order_then_id_and_filters_featured(pool: PgPool) {
    let store = PgStore::new(pool);
    store.create_project(&new_project("C", "c", 2, true)).await.unwrap();
    store.create_project(&new_project("A", "a", 1, false)).await.unwrap();
    store.create_project(&new_project("B", "b", 2, false)).await.unwrap();
    store.create_project(&new_project("D", "d", 0, true)).await.unwrap();

    // "c" and "b" share display_order 2, so insertion id breaks the tie.
    assert_eq!(slugs(&store, false).await, ["d", "a", "c", "b"]);
    assert_eq!(slugs(&store, true).await, ["d", "c"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn partial_update_keeps_absent_fields(pool: PgPool) {
    let store = PgStore::new(pool);
    let created = store
        .create_project(&new_project("Before", "before", 3, false))
        .await
        .unwrap();

    let changes = UpdateProject {
        title: Some("After".to_string()),
        is_featured: Some(true),
        ..Default::default()
    };
    let updated = store
        .update_project(created.id, &changes, "after")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "After");
    assert_eq!(updated.slug, "after");
    assert!(updated.is_featured);
    assert_eq!(updated.short_description, created.short_description);
    assert_eq!(updated.detailed_description, created.detailed_description);
    assert_eq!(updated.tech_stack, created.tech_stack);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.github_url, created.github_url);
    assert_eq!(updated.display_order, 3);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    assert!(store.find_project_by_slug("before").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn update_into_taken_slug_and_missing_row(pool: PgPool) {
    let store = PgStore::new(pool);
    store.create_project(&new_project("A", "a", 0, false)).await.unwrap();
    let b = store.create_project(&new_project("B", "b", 0, false)).await.unwrap();

    let clash = store.update_project(b.id, &UpdateProject::default(), "a").await;
    assert_matches!(
        clash,
        Err(StoreError::DuplicateKey { constraint }) if constraint == "uq_projects_slug"
    );

    let missing = store
        .update_project(b.id + 1000, &UpdateProject::default(), "zzz")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_reports_whether_a_row_went(pool: PgPool) {
    let store = PgStore::new(pool);
    let created = store
        .create_project(&new_project("Gone", "gone", 0, false))
        .await
        .unwrap();

    assert!(store.delete_project(created.id).await.unwrap());
    assert!(!store.delete_project(created.id).await.unwrap());
    assert!(store.find_project_by_id(created.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Content sections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn content_upsert_replaces_document_in_place(pool: PgPool) {
    let store = PgStore::new(pool);
    assert!(store.find_content_section(ContentKey::Hero).await.unwrap().is_none());

    let first = SectionContent::Hero(HeroContent {
        title: "Hello".to_string(),
        subtitle: "Backend developer".to_string(),
        ctas: vec![CallToAction {
            text: "Projects".to_string(),
            href: "/projects".to_string(),
        }],
        background_image: None,
    });
    let created = store.upsert_content_section(&first).await.unwrap();
    assert_eq!(created.key, ContentKey::Hero);
    assert_eq!(created.content, first);

    let second = SectionContent::Hero(HeroContent {
        title: "Hi again".to_string(),
        ..Default::default()
    });
    let replaced = store.upsert_content_section(&second).await.unwrap();

    assert_eq!(replaced.content, second);
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at >= created.updated_at);

    let sections = store.list_content_sections().await.unwrap();
    assert_eq!(sections.len(), 1);
    let found = store
        .find_content_section(ContentKey::Hero)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.content, second);
}

// ---------------------------------------------------------------------------
// Admin users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn admin_upsert_keeps_one_row_per_email(pool: PgPool) {
    let store = PgStore::new(pool);
    let input = NewAdminUser {
        email: "owner@example.com".to_string(),
        password_hash: "hash-1".to_string(),
        role: "owner".to_string(),
    };
    let first = store.upsert_admin_user(&input).await.unwrap();
    let second = store
        .upsert_admin_user(&NewAdminUser {
            password_hash: "hash-2".to_string(),
            ..input
        })
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    let found = store
        .find_admin_by_email("owner@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.password_hash, "hash-2");
    assert!(store.find_admin_by_email("nobody@example.com").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn messages_list_newest_first_and_delete(pool: PgPool) {
    let store = PgStore::new(pool);
    let older = store
        .create_message(&NewMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: None,
            message: "First".to_string(),
        })
        .await
        .unwrap();
    let newer = store
        .create_message(&NewMessage {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            subject: Some("Hello".to_string()),
            message: "Second".to_string(),
        })
        .await
        .unwrap();

    let ids: Vec<i64> = store
        .list_messages()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, [newer.id, older.id]);

    assert!(store.delete_message(older.id).await.unwrap());
    assert!(store.find_message(older.id).await.unwrap().is_none());
    assert!(!store.delete_message(older.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn ping_succeeds_on_a_live_pool(pool: PgPool) {
    let store = PgStore::new(pool);
    store.ping().await.unwrap();
}
