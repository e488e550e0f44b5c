//! One-shot seeding tool: applies migrations, then writes the admin account,
//! sample projects, and default content sections.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::config::{DatabaseConfig, SeedConfig};
use folio_api::seed::run_seed;
use folio_db::PgStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_api=debug,folio_seed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_config = DatabaseConfig::from_env();
    let seed_config = SeedConfig::from_env();

    let pool = folio_db::create_pool(&db_config.url, db_config.max_connections)
        .await
        .expect("Failed to connect to database");

    folio_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let store = PgStore::new(pool.clone());
    match run_seed(&store, &seed_config).await {
        Ok(report) => tracing::info!(
            admin_id = report.admin_id,
            projects_inserted = report.projects_inserted,
            sections_upserted = report.sections_upserted,
            "Database seeded successfully"
        ),
        Err(e) => {
            tracing::error!(error = %e, "Seeding failed");
            pool.close().await;
            std::process::exit(1);
        }
    }

    pool.close().await;
}
