use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{ExerciseWithSets, WorkoutExercise, WorkoutSession};
use crate::repositories::WorkoutRepository;
use crate::sets::{sets_from_inputs, SetInput};

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
}

/// The workout entry form.
#[derive(Debug, Deserialize)]
pub struct CreateWorkout {
    pub date: Option<NaiveDate>,
    pub bodyweight: Option<f64>,
    #[serde(default)]
    pub exercises: Vec<CreateWorkoutExercise>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutExercise {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sets: Vec<SetInput>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutCreated {
    pub session: WorkoutSession,
    pub exercises: Vec<WorkoutExercise>,
}

impl CreateWorkout {
    fn validate(self) -> Result<(NaiveDate, f64, Vec<ExerciseWithSets>)> {
        let date = self
            .date
            .ok_or_else(|| AppError::Validation("Select workout date.".to_string()))?;
        let bodyweight = self
            .bodyweight
            .filter(|bw| bw.is_finite() && *bw > 0.0)
            .ok_or_else(|| {
                AppError::Validation("Bodyweight must be a positive number.".to_string())
            })?;

        let exercises = self
            .exercises
            .into_iter()
            .map(|exercise| {
                let name = exercise.name.trim();
                if name.is_empty() {
                    return Err(AppError::Validation("Enter exercise name.".to_string()));
                }
                let sets = sets_from_inputs(&exercise.sets)
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                Ok(ExerciseWithSets::new(name, sets))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((date, bodyweight, exercises))
    }
}

pub async fn create(
    State(state): State<WorkoutsState>,
    Json(form): Json<CreateWorkout>,
) -> Result<(StatusCode, Json<WorkoutCreated>)> {
    let (date, bodyweight, exercises) = form.validate()?;

    let (session, exercises) = state
        .workout_repo
        .save_workout(date, bodyweight, exercises)
        .await?;

    tracing::info!("Workout saved for {}", session.date);
    Ok((StatusCode::CREATED, Json(WorkoutCreated { session, exercises })))
}
