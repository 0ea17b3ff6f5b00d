use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{query_all, NewWorkoutSession, WorkoutSession};

#[derive(Clone)]
pub struct SessionRepository {
    db: Database,
}

impl SessionRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn save(&self, session: NewWorkoutSession) -> Result<WorkoutSession> {
        let pool = self.db.pool()?;
        tokio::task::spawn_blocking(move || -> Result<WorkoutSession> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workout_sessions (date, bodyweight) VALUES (?, ?)",
                rusqlite::params![session.date, session.bodyweight],
            )?;
            Ok(WorkoutSession {
                id: conn.last_insert_rowid(),
                date: session.date,
                bodyweight: session.bodyweight,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// All sessions in insertion order.
    pub async fn find_all(&self) -> Result<Vec<WorkoutSession>> {
        let pool = self.db.pool()?;
        tokio::task::spawn_blocking(move || -> Result<Vec<WorkoutSession>> {
            let conn = pool.get()?;
            let sessions = query_all(
                &conn,
                "SELECT id, date, bodyweight FROM workout_sessions ORDER BY id",
                [],
            )?;
            Ok(sessions)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
