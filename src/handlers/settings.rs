use axum::{extract::State, Json};
use serde::Serialize;

use crate::db::Database;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct SettingsState {
    pub db: Database,
}

#[derive(Debug, Serialize)]
pub struct WipeResponse {
    /// Whether a database file was found and deleted.
    pub existed: bool,
}

/// Deletes every logged workout.
pub async fn wipe(State(state): State<SettingsState>) -> Result<Json<WipeResponse>> {
    let db = state.db.clone();
    let existed = tokio::task::spawn_blocking(move || db.wipe())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    tracing::warn!("All workout data wiped (file existed: {})", existed);
    Ok(Json(WipeResponse { existed }))
}
