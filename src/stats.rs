//! Table views over logged workouts.
//!
//! Pure functions of the session and exercise lists. Bad records are skipped
//! one at a time: an exercise whose session cannot be found adds no cell, but
//! the rest of its group is still reported.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{WorkoutExercise, WorkoutSession};
use crate::sets::pick_best_set;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Case-insensitive substring filter on exercise names. A missing or blank
/// query matches everything.
#[derive(Debug, Clone)]
pub struct NameFilter {
    needle: Option<String>,
}

impl NameFilter {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            needle: query
                .filter(|q| !q.trim().is_empty())
                .map(str::to_lowercase),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.needle {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyweightRow {
    pub id: i64,
    pub date: NaiveDate,
    pub bodyweight: f64,
}

/// One exercise name with a cell per date it was logged on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotRow {
    pub id: i64,
    pub name: String,
    /// Keyed by `YYYY-MM-DD`.
    pub cells: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummaryRow {
    pub session_id: i64,
    pub date: NaiveDate,
    pub name: String,
    pub sets: String,
}

pub fn bodyweight_by_date(sessions: &[WorkoutSession]) -> Vec<BodyweightRow> {
    sessions
        .iter()
        .map(|s| BodyweightRow {
            id: s.id,
            date: s.date,
            bodyweight: s.bodyweight,
        })
        .collect()
}

/// Every logged sets string, per exercise name and date.
pub fn all_exercises_all_sets(
    exercises: &[WorkoutExercise],
    sessions: &[WorkoutSession],
    query: Option<&str>,
) -> Vec<PivotRow> {
    pivot(exercises, sessions, query, |sets| sets.to_string())
}

/// The best set, per exercise name and date.
pub fn all_exercises_best_set(
    exercises: &[WorkoutExercise],
    sessions: &[WorkoutSession],
    query: Option<&str>,
) -> Vec<PivotRow> {
    pivot(exercises, sessions, query, pick_best_set)
}

/// Rows are ordered by name; each row's id is the first exercise of its
/// group. Two records with the same name on the same date share a cell and
/// the later one wins.
fn pivot<F>(
    exercises: &[WorkoutExercise],
    sessions: &[WorkoutSession],
    query: Option<&str>,
    cell: F,
) -> Vec<PivotRow>
where
    F: Fn(&str) -> String,
{
    let filter = NameFilter::new(query);
    let dates = session_dates(sessions);
    let mut rows: BTreeMap<&str, PivotRow> = BTreeMap::new();

    for exercise in exercises.iter().filter(|e| filter.matches(&e.name)) {
        let row = rows
            .entry(exercise.name.as_str())
            .or_insert_with(|| PivotRow {
                id: exercise.id,
                name: exercise.name.clone(),
                cells: BTreeMap::new(),
            });

        let Some(date) = exercise.session_id.and_then(|id| dates.get(&id)) else {
            tracing::debug!("Exercise {} has no session, skipping", exercise.id);
            continue;
        };
        row.cells.insert(format_date(*date), cell(&exercise.sets));
    }

    rows.into_values().collect()
}

/// One row per session and exercise logged in it, sessions first.
/// Exercises without a session are left out.
pub fn all_sessions_summary(
    sessions: &[WorkoutSession],
    exercises: &[WorkoutExercise],
    query: Option<&str>,
) -> Vec<SessionSummaryRow> {
    let filter = NameFilter::new(query);
    let mut by_session: HashMap<i64, Vec<&WorkoutExercise>> = HashMap::new();
    for exercise in exercises.iter().filter(|e| filter.matches(&e.name)) {
        if let Some(session_id) = exercise.session_id {
            by_session.entry(session_id).or_default().push(exercise);
        }
    }

    sessions
        .iter()
        .flat_map(|session| {
            by_session
                .get(&session.id)
                .into_iter()
                .flatten()
                .map(move |exercise| SessionSummaryRow {
                    session_id: session.id,
                    date: session.date,
                    name: exercise.name.clone(),
                    sets: exercise.sets.clone(),
                })
        })
        .collect()
}

/// Distinct session dates as `YYYY-MM-DD`, oldest first.
pub fn all_dates(sessions: &[WorkoutSession]) -> BTreeSet<String> {
    sessions.iter().map(|s| format_date(s.date)).collect()
}

pub(crate) fn session_dates(sessions: &[WorkoutSession]) -> HashMap<i64, NaiveDate> {
    sessions.iter().map(|s| (s.id, s.date)).collect()
}
