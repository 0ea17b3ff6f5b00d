use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::error::{AppError, Result};
use crate::migrations::run_migrations;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Memory,
    File(PathBuf),
}

impl Location {
    /// Accepts `sqlite:<path>`, a bare path, or `:memory:`. Query parameters
    /// (e.g. `?mode=rwc`) are ignored.
    pub fn parse(database_url: &str) -> Self {
        let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
        let path = path.split('?').next().unwrap_or(path);

        if path == ":memory:" {
            Location::Memory
        } else {
            Location::File(PathBuf::from(path))
        }
    }
}

pub fn create_pool(location: &Location) -> std::result::Result<DbPool, r2d2::Error> {
    match location {
        // Every in-memory connection is its own database, so the pool must
        // hold exactly one.
        Location::Memory => Pool::builder()
            .max_size(1)
            .build(with_foreign_keys(SqliteConnectionManager::memory())),
        Location::File(path) => Pool::builder()
            .max_size(5)
            .build(with_foreign_keys(SqliteConnectionManager::file(path))),
    }
}

fn with_foreign_keys(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

/// Shared handle to the workout store.
///
/// The pool sits behind a lock so the store can be closed and rebuilt by
/// [`Database::wipe`] while repositories keep their handle.
#[derive(Clone)]
pub struct Database {
    location: Location,
    pool: Arc<RwLock<Option<DbPool>>>,
}

impl Database {
    /// Opens the store and brings its schema up to date.
    pub fn open(database_url: &str) -> Result<Self> {
        Self::open_at(Location::parse(database_url))
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open_at(Location::Memory)
    }

    fn open_at(location: Location) -> Result<Self> {
        let pool = initialize(&location)?;
        Ok(Self {
            location,
            pool: Arc::new(RwLock::new(Some(pool))),
        })
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The current pool, or [`AppError::StoreClosed`] after [`Database::close`].
    pub fn pool(&self) -> Result<DbPool> {
        self.pool
            .read()
            .map_err(lock_poisoned)?
            .clone()
            .ok_or(AppError::StoreClosed)
    }

    pub fn is_open(&self) -> bool {
        self.pool.read().map(|pool| pool.is_some()).unwrap_or(false)
    }

    pub fn close(&self) -> Result<()> {
        if self.pool.write().map_err(lock_poisoned)?.take().is_some() {
            tracing::info!("Database closed");
        }
        Ok(())
    }

    /// Closes the store, deletes its backing file and starts over with an
    /// empty schema. Returns whether a file was deleted.
    pub fn wipe(&self) -> Result<bool> {
        let mut pool = self.pool.write().map_err(lock_poisoned)?;
        pool.take();

        let removed = match &self.location {
            Location::Memory => Ok(false),
            Location::File(path) => match std::fs::remove_file(path) {
                Ok(()) => {
                    tracing::info!("Deleted database file {}", path.display());
                    Ok(true)
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
                Err(e) => Err(e),
            },
        };

        *pool = Some(initialize(&self.location)?);
        Ok(removed?)
    }
}

fn initialize(location: &Location) -> Result<DbPool> {
    let pool = create_pool(location)?;
    run_migrations(&pool)?;
    Ok(pool)
}

fn lock_poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::Internal("database lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(db: &Database) -> i64 {
        let conn = db.pool().unwrap().get().unwrap();
        conn.query_row("SELECT COUNT(*) FROM workout_sessions", [], |row| {
            row.get(0)
        })
        .unwrap()
    }

    fn temp_db_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("liftbook-{}-{}.db", name, std::process::id()))
    }

    #[test]
    fn test_location_parse() {
        assert_eq!(Location::parse("sqlite::memory:"), Location::Memory);
        assert_eq!(Location::parse(":memory:"), Location::Memory);
        assert_eq!(
            Location::parse("sqlite:workouts.db?mode=rwc"),
            Location::File(PathBuf::from("workouts.db"))
        );
        assert_eq!(
            Location::parse("/tmp/w.db"),
            Location::File(PathBuf::from("/tmp/w.db"))
        );
    }

    #[test]
    fn test_open_in_memory_runs_migrations() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.is_open());
        assert_eq!(table_count(&db), 0);
    }

    #[test]
    fn test_closed_store_is_unusable() {
        let db = Database::open_in_memory().unwrap();
        db.close().unwrap();

        assert!(!db.is_open());
        assert!(matches!(db.pool(), Err(AppError::StoreClosed)));
    }

    #[test]
    fn test_wipe_in_memory_resets_data() {
        let db = Database::open_in_memory().unwrap();
        db.pool()
            .unwrap()
            .get()
            .unwrap()
            .execute(
                "INSERT INTO workout_sessions (date, bodyweight) VALUES ('2024-01-01', 80.0)",
                [],
            )
            .unwrap();
        assert_eq!(table_count(&db), 1);

        let existed = db.wipe().unwrap();

        assert!(!existed);
        assert!(db.is_open());
        assert_eq!(table_count(&db), 0);
    }

    #[test]
    fn test_wipe_deletes_backing_file() {
        let path = temp_db_path("wipe");
        let _ = std::fs::remove_file(&path);

        let db = Database::open(&format!("sqlite:{}", path.display())).unwrap();
        db.pool()
            .unwrap()
            .get()
            .unwrap()
            .execute(
                "INSERT INTO workout_sessions (date, bodyweight) VALUES ('2024-01-01', 80.0)",
                [],
            )
            .unwrap();

        assert!(db.wipe().unwrap());
        assert_eq!(table_count(&db), 0);
        assert!(path.exists());

        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }
}
