use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::charts::{self, BodyweightPoint, ExercisePoint};
use crate::error::Result;
use crate::handlers::stats::StatsState;

#[derive(Debug, Default, Deserialize)]
pub struct ExerciseQuery {
    pub name: Option<String>,
}

pub async fn bodyweight(State(state): State<StatsState>) -> Result<Json<Vec<BodyweightPoint>>> {
    let sessions = state.session_repo.find_all().await?;
    Ok(Json(charts::bodyweight_series(&sessions)))
}

pub async fn exercise_names(State(state): State<StatsState>) -> Result<Json<Vec<String>>> {
    let exercises = state.exercise_repo.find_all().await?;
    Ok(Json(charts::exercise_names(&exercises)))
}

pub async fn exercise(
    State(state): State<StatsState>,
    Query(query): Query<ExerciseQuery>,
) -> Result<Json<Vec<ExercisePoint>>> {
    let (sessions, exercises) = state.load().await?;
    Ok(Json(charts::exercise_series(
        &exercises,
        &sessions,
        query.name.as_deref(),
    )))
}
