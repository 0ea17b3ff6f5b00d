use std::collections::BTreeSet;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{WorkoutExercise, WorkoutSession};
use crate::repositories::{ExerciseRepository, SessionRepository};
use crate::stats::{self, BodyweightRow, PivotRow, SessionSummaryRow};

#[derive(Clone)]
pub struct StatsState {
    pub session_repo: SessionRepository,
    pub exercise_repo: ExerciseRepository,
}

impl StatsState {
    pub(crate) async fn load(&self) -> Result<(Vec<WorkoutSession>, Vec<WorkoutExercise>)> {
        let sessions = self.session_repo.find_all().await?;
        let exercises = self.exercise_repo.find_all().await?;
        Ok((sessions, exercises))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotMode {
    #[default]
    All,
    Best,
}

#[derive(Debug, Default, Deserialize)]
pub struct PivotQuery {
    pub q: Option<String>,
    #[serde(default)]
    pub mode: PivotMode,
}

/// Column headers come from every session, rows from the matching exercises.
#[derive(Debug, Serialize)]
pub struct PivotTable {
    pub dates: BTreeSet<String>,
    pub rows: Vec<PivotRow>,
}

pub async fn bodyweight(State(state): State<StatsState>) -> Result<Json<Vec<BodyweightRow>>> {
    let sessions = state.session_repo.find_all().await?;
    Ok(Json(stats::bodyweight_by_date(&sessions)))
}

pub async fn exercises(
    State(state): State<StatsState>,
    Query(query): Query<PivotQuery>,
) -> Result<Json<PivotTable>> {
    let (sessions, exercises) = state.load().await?;
    let filter = query.q.as_deref();

    let rows = match query.mode {
        PivotMode::All => stats::all_exercises_all_sets(&exercises, &sessions, filter),
        PivotMode::Best => stats::all_exercises_best_set(&exercises, &sessions, filter),
    };

    Ok(Json(PivotTable {
        dates: stats::all_dates(&sessions),
        rows,
    }))
}

pub async fn sessions(
    State(state): State<StatsState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<SessionSummaryRow>>> {
    let (sessions, exercises) = state.load().await?;
    Ok(Json(stats::all_sessions_summary(
        &sessions,
        &exercises,
        query.q.as_deref(),
    )))
}

pub async fn dates(State(state): State<StatsState>) -> Result<Json<BTreeSet<String>>> {
    let sessions = state.session_repo.find_all().await?;
    Ok(Json(stats::all_dates(&sessions)))
}
