//! Sets notation.
//!
//! A logged exercise stores its sets as `weight x reps` tokens joined by
//! `-`, e.g. `"100x5-110x4"`. Malformed tokens are skipped rather than
//! rejected, so a single typo never hides the rest of a workout.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SET_SEPARATOR: &str = "-";
pub const WEIGHT_REPS_SEPARATOR: &str = "x";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSetError {
    #[error("expected `<weight>x<reps>`, got {0:?}")]
    Shape(String),

    #[error("invalid weight: {0:?}")]
    Weight(String),

    #[error("invalid reps: {0:?}")]
    Reps(String),
}

/// One performed set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub weight: f64,
    pub reps: i32,
}

impl SetEntry {
    /// Weight first, reps second. A full tie is not "better", which keeps
    /// the first-encountered set when selecting.
    fn beats(&self, other: &SetEntry) -> bool {
        match self.weight.partial_cmp(&other.weight) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.reps > other.reps,
            _ => false,
        }
    }
}

impl FromStr for SetEntry {
    type Err = ParseSetError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut parts = token.split(WEIGHT_REPS_SEPARATOR);
        let (weight, reps) = match (parts.next(), parts.next(), parts.next()) {
            (Some(weight), Some(reps), None) => (weight.trim(), reps.trim()),
            _ => return Err(ParseSetError::Shape(token.to_string())),
        };

        let weight = weight
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| ParseSetError::Weight(weight.to_string()))?;
        let reps = reps
            .parse::<i32>()
            .map_err(|_| ParseSetError::Reps(reps.to_string()))?;

        Ok(Self { weight, reps })
    }
}

impl fmt::Display for SetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.weight, WEIGHT_REPS_SEPARATOR, self.reps)
    }
}

/// Valid sets of `sets`, in order. Invalid tokens are dropped.
pub fn parse_sets(sets: &str) -> impl Iterator<Item = SetEntry> + '_ {
    sets.split(SET_SEPARATOR).filter_map(|token| match token.parse() {
        Ok(set) => Some(set),
        Err(e) => {
            if !token.is_empty() {
                tracing::trace!("Skipping set token: {}", e);
            }
            None
        }
    })
}

pub fn best_set(sets: &str) -> Option<SetEntry> {
    parse_sets(sets).fold(None, |best, set| match best {
        Some(current) if !set.beats(&current) => Some(current),
        _ => Some(set),
    })
}

/// The best set formatted as `<weight>x<reps>`, or an empty string when
/// `sets` holds no valid token.
pub fn pick_best_set(sets: &str) -> String {
    if sets.trim().is_empty() {
        return String::new();
    }
    best_set(sets).map(|set| set.to_string()).unwrap_or_default()
}

pub fn join_sets(sets: &[SetEntry]) -> String {
    sets.iter()
        .map(SetEntry::to_string)
        .collect::<Vec<_>>()
        .join(SET_SEPARATOR)
}

/// One row of the workout entry form, as typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetInput {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub reps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Fill in both weight and reps for each set.")]
pub struct IncompleteSet;

/// Builds sets notation from form rows. Empty rows are ignored; a row with
/// only one of the two fields filled is rejected.
pub fn sets_from_inputs(inputs: &[SetInput]) -> Result<String, IncompleteSet> {
    let mut tokens = Vec::with_capacity(inputs.len());
    for input in inputs {
        let weight = input.weight.trim();
        let reps = input.reps.trim();
        match (weight.is_empty(), reps.is_empty()) {
            (true, true) => continue,
            (false, false) => tokens.push(format!("{weight}{WEIGHT_REPS_SEPARATOR}{reps}")),
            _ => return Err(IncompleteSet),
        }
    }
    Ok(tokens.join(SET_SEPARATOR))
}
