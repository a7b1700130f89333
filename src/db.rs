//! Database connection bootstrap

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

/// Open the connection pool and check it is reachable
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(false);

    tracing::info!(
        "Connecting to database (max_connections={}, max_lifetime={}s)...",
        config.max_connections,
        config.max_lifetime.as_secs()
    );
    let db = Database::connect(options).await?;
    db.ping().await?;

    tracing::info!("Database connection established");
    Ok(db)
}

pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    tracing::info!("Running migrations...");
    migration::Migrator::up(db, None).await
}
