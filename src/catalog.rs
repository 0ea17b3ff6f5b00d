//! Exercise catalog.
//!
//! Reference data (name, targeted muscles, description) read from a CSV
//! resource. The header line is discarded and each remaining line is split
//! into at most three fields, so descriptions may contain commas. The catalog
//! is informational: a missing or unreadable resource is logged and leaves
//! the catalog empty instead of failing the caller.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::PathBuf;

use crate::models::Exercise;

pub const BUNDLED_CSV: &str = include_str!("../data/exercises.csv");

const FIELD_COUNT: usize = 3;

/// Something the catalog can be read from.
pub trait CatalogSource {
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// The CSV compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl CatalogSource for BundledCatalog {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(BUNDLED_CSV.as_bytes())))
    }

    fn describe(&self) -> String {
        "bundled exercises.csv".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FileCatalog {
    pub path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses catalog CSV. Lines that do not split into exactly three fields
/// are skipped. Bytes that are not valid UTF-8 are replaced, so a bad byte
/// only affects the line it is on.
pub fn parse_catalog<R: BufRead>(reader: R) -> io::Result<Vec<Exercise>> {
    let mut lines = reader.split(b'\n');
    if let Some(header) = lines.next() {
        header?;
    }

    let mut exercises = Vec::new();
    for (index, line) in lines.enumerate() {
        let raw = line?;
        let decoded = String::from_utf8_lossy(&raw);
        let line = decoded.strip_suffix('\r').unwrap_or(&decoded);
        let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').map(str::trim).collect();
        let &[name, muscles, description] = fields.as_slice() else {
            if !line.trim().is_empty() {
                // +2: one for the header, one for 1-based numbering
                tracing::debug!("Skipping malformed catalog line {}", index + 2);
            }
            continue;
        };
        exercises.push(Exercise {
            name: name.to_string(),
            muscles: muscles.to_string(),
            description: description.to_string(),
        });
    }
    Ok(exercises)
}

/// In-memory exercise catalog, loaded at most once.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog loaded from `source`.
    pub fn loaded(source: &dyn CatalogSource) -> Self {
        let mut catalog = Self::new();
        catalog.load(source);
        catalog
    }

    /// Fills the catalog from `source` unless it already holds entries.
    /// Failures are logged and leave the catalog empty.
    pub fn load(&mut self, source: &dyn CatalogSource) {
        if !self.exercises.is_empty() {
            return;
        }

        let reader = match source.open() {
            Ok(reader) => reader,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("Exercise catalog not found: {}", source.describe());
                return;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to open exercise catalog {}: {}",
                    source.describe(),
                    e
                );
                return;
            }
        };

        match parse_catalog(BufReader::new(reader)) {
            Ok(exercises) => {
                tracing::info!(
                    "Loaded {} exercises from {}",
                    exercises.len(),
                    source.describe()
                );
                self.exercises = exercises;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to read exercise catalog {}: {}",
                    source.describe(),
                    e
                );
            }
        }
    }

    /// A copy of every entry; changing it never touches the catalog.
    pub fn all(&self) -> Vec<Exercise> {
        self.exercises.clone()
    }

    /// First entry whose name contains `query`, ignoring case.
    pub fn find_by_name(&self, query: &str) -> Option<&Exercise> {
        if query.trim().is_empty() {
            return None;
        }
        let query = query.to_lowercase();
        self.exercises
            .iter()
            .find(|e| !e.name.is_empty() && e.name.to_lowercase().contains(&query))
    }

    /// Names for autocomplete. A blank query lists every name; otherwise at
    /// most `limit` names containing the query, ignoring case.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        let names = self.exercises.iter().map(|e| &e.name).filter(|n| !n.is_empty());
        if query.trim().is_empty() {
            return names.cloned().collect();
        }
        let query = query.to_lowercase();
        names
            .filter(|n| n.to_lowercase().contains(&query))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.exercises.clear();
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
