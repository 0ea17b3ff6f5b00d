use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// One logged workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: i64,
    pub date: NaiveDate,
    pub bodyweight: f64,
}

impl FromSqliteRow for WorkoutSession {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            bodyweight: row.get("bodyweight")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWorkoutSession {
    pub date: NaiveDate,
    pub bodyweight: f64,
}
