use chrono::NaiveDate;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{ExerciseWithSets, WorkoutExercise, WorkoutSession};

/// Saves a whole workout: the session and every exercise logged in it.
#[derive(Clone)]
pub struct WorkoutRepository {
    db: Database,
}

impl WorkoutRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts the session and its exercises in one transaction, so a failed
    /// exercise insert leaves no half-saved workout behind.
    pub async fn save_workout(
        &self,
        date: NaiveDate,
        bodyweight: f64,
        exercises: Vec<ExerciseWithSets>,
    ) -> Result<(WorkoutSession, Vec<WorkoutExercise>)> {
        let pool = self.db.pool()?;
        tokio::task::spawn_blocking(move || -> Result<(WorkoutSession, Vec<WorkoutExercise>)> {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;

            tx.execute(
                "INSERT INTO workout_sessions (date, bodyweight) VALUES (?, ?)",
                rusqlite::params![date, bodyweight],
            )?;
            let session = WorkoutSession {
                id: tx.last_insert_rowid(),
                date,
                bodyweight,
            };

            let mut saved = Vec::with_capacity(exercises.len());
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO workout_exercises (name, sets, session_id) VALUES (?, ?, ?)",
                )?;
                for exercise in exercises {
                    stmt.execute(rusqlite::params![exercise.name, exercise.sets, session.id])?;
                    saved.push(WorkoutExercise {
                        id: tx.last_insert_rowid(),
                        name: exercise.name,
                        sets: exercise.sets,
                        session_id: Some(session.id),
                    });
                }
            }

            tx.commit()?;
            tracing::debug!(
                "Saved workout {} on {} with {} exercises",
                session.id,
                session.date,
                saved.len()
            );
            Ok((session, saved))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
