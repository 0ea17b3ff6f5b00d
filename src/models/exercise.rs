use serde::Serialize;

/// Reference entry from the exercise catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: String,
    pub muscles: String,
    pub description: String,
}
