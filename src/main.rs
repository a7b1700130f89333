use std::sync::Arc;

use stats_collection_service::{
    config::Config, db, handlers, repository::PostgresRepository,
    services::statistics::StatisticsService, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stats_collection_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Connect to database
    let db = db::connect(&config).await?;
    if config.run_migrations {
        db::migrate(&db).await?;
    }

    let repo = PostgresRepository::new(db);
    let state = AppState {
        service: StatisticsService::new(Arc::new(repo)),
    };

    let app = handlers::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
