use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{query_all, NewWorkoutExercise, WorkoutExercise};

#[derive(Clone)]
pub struct ExerciseRepository {
    db: Database,
}

impl ExerciseRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn save(&self, exercise: NewWorkoutExercise) -> Result<WorkoutExercise> {
        let pool = self.db.pool()?;
        tokio::task::spawn_blocking(move || -> Result<WorkoutExercise> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workout_exercises (name, sets, session_id) VALUES (?, ?, ?)",
                rusqlite::params![exercise.name, exercise.sets, exercise.session_id],
            )?;
            Ok(WorkoutExercise {
                id: conn.last_insert_rowid(),
                name: exercise.name,
                sets: exercise.sets,
                session_id: exercise.session_id,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// All exercises in insertion order, attached to a session or not.
    pub async fn find_all(&self) -> Result<Vec<WorkoutExercise>> {
        let pool = self.db.pool()?;
        tokio::task::spawn_blocking(move || -> Result<Vec<WorkoutExercise>> {
            let conn = pool.get()?;
            let exercises = query_all(
                &conn,
                "SELECT id, name, sets, session_id FROM workout_exercises ORDER BY id",
                [],
            )?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::NewWorkoutSession;
    use crate::repositories::SessionRepository;

    fn new_exercise(name: &str, sets: &str, session_id: Option<i64>) -> NewWorkoutExercise {
        NewWorkoutExercise {
            name: name.to_string(),
            sets: sets.to_string(),
            session_id,
        }
    }

    #[tokio::test]
    async fn test_save_and_find_all() {
        let db = Database::open_in_memory().unwrap();
        let session = SessionRepository::new(db.clone())
            .save(NewWorkoutSession {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                bodyweight: 80.0,
            })
            .await
            .unwrap();
        let repo = ExerciseRepository::new(db);

        let saved = repo
            .save(new_exercise("Bench Press", "100x5-110x4", Some(session.id)))
            .await
            .unwrap();
        let all = repo.find_all().await.unwrap();

        assert_eq!(all, vec![saved]);
        assert_eq!(all[0].sets, "100x5-110x4");
        assert_eq!(all[0].session_id, Some(session.id));
    }

    #[tokio::test]
    async fn test_unknown_session_is_rejected() {
        let repo = ExerciseRepository::new(Database::open_in_memory().unwrap());

        let result = repo.save(new_exercise("Bench Press", "100x5", Some(42))).await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_orphan_exercise_is_stored() {
        let repo = ExerciseRepository::new(Database::open_in_memory().unwrap());

        repo.save(new_exercise("Curl", "20x10", None)).await.unwrap();
        let all = repo.find_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].session_id, None);
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = ExerciseRepository::new(Database::open_in_memory().unwrap());

        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
