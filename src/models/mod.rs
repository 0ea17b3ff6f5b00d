pub mod exercise;
pub mod from_row;
pub mod workout_exercise;
pub mod workout_session;

pub use exercise::Exercise;
pub use from_row::{query_all, FromSqliteRow};
pub use workout_exercise::{ExerciseWithSets, NewWorkoutExercise, WorkoutExercise};
pub use workout_session::{NewWorkoutSession, WorkoutSession};
