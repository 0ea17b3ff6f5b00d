use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{catalog, graphs, health, settings, stats, workouts};

pub fn create_router(
    health_state: health::HealthState,
    workouts_state: workouts::WorkoutsState,
    stats_state: stats::StatsState,
    catalog_state: catalog::CatalogState,
    settings_state: settings::SettingsState,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state)
        // Workout entry
        .route("/workouts", post(workouts::create))
        .with_state(workouts_state)
        // Tables and charts
        .route("/stats/bodyweight", get(stats::bodyweight))
        .route("/stats/exercises", get(stats::exercises))
        .route("/stats/sessions", get(stats::sessions))
        .route("/stats/dates", get(stats::dates))
        .route("/graphs/bodyweight", get(graphs::bodyweight))
        .route("/graphs/exercises", get(graphs::exercise_names))
        .route("/graphs/exercise", get(graphs::exercise))
        .with_state(stats_state)
        // Exercise catalog
        .route("/catalog", get(catalog::suggest))
        .route("/catalog/lookup", get(catalog::lookup))
        .with_state(catalog_state)
        // Settings
        .route("/settings/wipe", post(settings::wipe))
        .with_state(settings_state)
}
