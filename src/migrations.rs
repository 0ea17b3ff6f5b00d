//! Embedded database migrations.
//!
//! The schema ships inside the binary; applied migrations are recorded in
//! `_migrations` so reopening an existing database is a no-op.

use crate::db::DbPool;
use crate::error::Result;

/// All migrations in order, each as (filename, sql_content)
pub const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_create_workout_sessions.sql",
        include_str!("../migrations/001_create_workout_sessions.sql"),
    ),
    (
        "002_create_workout_exercises.sql",
        include_str!("../migrations/002_create_workout_exercises.sql"),
    ),
];

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    tracing::debug!("Running migrations...");

    let conn = pool.get()?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    for (filename, sql) in MIGRATIONS {
        let already_applied: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM _migrations WHERE name = ?",
            [filename],
            |row| row.get(0),
        )?;

        if already_applied {
            tracing::debug!("Skipping already applied migration: {}", filename);
            continue;
        }

        tracing::info!("Running migration: {}", filename);

        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO _migrations (name) VALUES (?)", [filename])?;
    }

    tracing::debug!("Migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, Location};

    #[test]
    fn test_migrations_are_recorded_once() {
        let pool = create_pool(&Location::Memory).unwrap();

        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();

        let conn = pool.get().unwrap();
        let applied: i64 = conn
            .query_row("SELECT COUNT(*) FROM _migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, MIGRATIONS.len() as i64);
    }
}
