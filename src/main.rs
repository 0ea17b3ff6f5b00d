use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liftbook::catalog::{BundledCatalog, CatalogSource, ExerciseCatalog, FileCatalog};
use liftbook::config::Config;
use liftbook::db::Database;
use liftbook::handlers::{catalog, health, settings, stats, workouts};
use liftbook::repositories::{ExerciseRepository, SessionRepository, WorkoutRepository};
use liftbook::routes;
use liftbook::version::GIT_VERSION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liftbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("liftbook {}", GIT_VERSION);
    tracing::info!("Opening database: {}", config.database_url);

    let db = Database::open(&config.database_url)?;

    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(FileCatalog::new(path.clone())),
        None => Box::new(BundledCatalog),
    };
    let exercise_catalog = Arc::new(ExerciseCatalog::loaded(source.as_ref()));

    // Create repositories
    let session_repo = SessionRepository::new(db.clone());
    let exercise_repo = ExerciseRepository::new(db.clone());
    let workout_repo = WorkoutRepository::new(db.clone());

    let app = routes::create_router(
        health::HealthState { db: db.clone() },
        workouts::WorkoutsState { workout_repo },
        stats::StatsState {
            session_repo,
            exercise_repo,
        },
        catalog::CatalogState {
            catalog: exercise_catalog,
        },
        settings::SettingsState { db: db.clone() },
    );

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close()?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
