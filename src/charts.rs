//! Chart series over logged workouts.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{WorkoutExercise, WorkoutSession};
use crate::sets::{pick_best_set, SetEntry};
use crate::stats::session_dates;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyweightPoint {
    pub date: NaiveDate,
    pub bodyweight: f64,
}

/// Best set of one logged exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExercisePoint {
    pub date: NaiveDate,
    pub weight: f64,
    pub reps: i32,
}

/// Distinct exercise names, sorted.
pub fn exercise_names(exercises: &[WorkoutExercise]) -> Vec<String> {
    exercises
        .iter()
        .map(|e| e.name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn bodyweight_series(sessions: &[WorkoutSession]) -> Vec<BodyweightPoint> {
    let mut points: Vec<_> = sessions
        .iter()
        .map(|s| BodyweightPoint {
            date: s.date,
            bodyweight: s.bodyweight,
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Best set over time for the exercise called `name` (ignoring case), or
/// for every exercise when `name` is missing or blank. Records without a
/// usable best set or without a session are left out.
pub fn exercise_series(
    exercises: &[WorkoutExercise],
    sessions: &[WorkoutSession],
    name: Option<&str>,
) -> Vec<ExercisePoint> {
    let name = name.map(str::trim).filter(|n| !n.is_empty()).map(str::to_lowercase);
    let dates = session_dates(sessions);

    let mut points: Vec<_> = exercises
        .iter()
        .filter(|e| match &name {
            Some(name) => e.name.to_lowercase() == *name,
            None => true,
        })
        .filter_map(|e| {
            let best = pick_best_set(&e.sets);
            if best.is_empty() {
                return None;
            }
            let set: SetEntry = best.parse().ok()?;
            let date = e.session_id.and_then(|id| dates.get(&id))?;
            Some(ExercisePoint {
                date: *date,
                weight: set.weight,
                reps: set.reps,
            })
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}
