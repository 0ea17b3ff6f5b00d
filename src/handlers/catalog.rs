use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog::ExerciseCatalog;
use crate::error::{AppError, Result};
use crate::models::Exercise;

/// The entry form shows this many suggestions while typing.
pub const SUGGESTION_LIMIT: usize = 10;

#[derive(Clone)]
pub struct CatalogState {
    pub catalog: Arc<ExerciseCatalog>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    pub name: Option<String>,
}

pub async fn suggest(
    State(state): State<CatalogState>,
    Query(query): Query<SuggestQuery>,
) -> Json<Vec<String>> {
    let q = query.q.unwrap_or_default();
    Json(state.catalog.suggest(&q, SUGGESTION_LIMIT))
}

pub async fn lookup(
    State(state): State<CatalogState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<Exercise>> {
    let name = query.name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Enter exercise name".to_string()));
    }

    state
        .catalog
        .find_by_name(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))
}
