use std::{env, sync::Arc};

use axum::Router;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use stats_collection_service::{
    handlers, repository::InMemoryRepository, services::statistics::StatisticsService, AppState,
};

/// Set up test database connection
/// Uses TEST_DATABASE_URL environment variable or falls back to default
#[allow(dead_code)]
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url = env::var("TEST_DATABASE_URL").unwrap_or_else(|_| {
        "postgresql://postgres@localhost:5432/stats-collection-test".to_string()
    });

    let db = Database::connect(&database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Router over an in-memory repository; the repository handle is returned
/// so tests can inspect what was persisted.
#[allow(dead_code)]
pub fn build_test_router() -> (Router, Arc<InMemoryRepository>) {
    let repo = Arc::new(InMemoryRepository::new());
    let state = AppState {
        service: StatisticsService::new(repo.clone()),
    };

    (handlers::router(state), repo)
}
