use axum::{extract::State, Json};
use serde::Serialize;

use crate::db::Database;
use crate::version::GIT_VERSION;

#[derive(Clone)]
pub struct HealthState {
    pub db: Database,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    git_version: &'static str,
}

pub async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        database: if state.db.is_open() { "open" } else { "closed" },
        git_version: GIT_VERSION,
    })
}
