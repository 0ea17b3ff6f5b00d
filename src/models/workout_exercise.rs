use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// An exercise performed within a session. `sets` is sets notation
/// (see [`crate::sets`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: i64,
    pub name: String,
    pub sets: String,
    /// `None` for exercises no longer attached to a session.
    pub session_id: Option<i64>,
}

impl FromSqliteRow for WorkoutExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            sets: row.get("sets")?,
            session_id: row.get("session_id")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWorkoutExercise {
    pub name: String,
    pub sets: String,
    pub session_id: Option<i64>,
}

/// One exercise's input on its way from the entry form to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseWithSets {
    pub name: String,
    pub sets: String,
}

impl ExerciseWithSets {
    pub fn new(name: impl Into<String>, sets: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: sets.into(),
        }
    }
}
