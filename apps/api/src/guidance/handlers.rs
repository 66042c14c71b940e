//! Axum route handlers for the Guidance API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::{AppError, ValidationError};
use crate::guidance::classifier::classify;
use crate::guidance::logger::spawn_search_log;
use crate::guidance::models::SearchResponse;
use crate::guidance::validation::validate_search;
use crate::state::AppState;

/// POST /api/guidance/search
///
/// Validates the body, schedules the search log write and answers from the
/// category's rule table. The log write never affects the response.
pub async fn handle_search(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(body) = body.map_err(|e| ValidationError::new(e.body_text()))?;
    let request = validate_search(&body)?;

    spawn_search_log(state.search_logger.clone(), &request);

    let classification = classify(request.category, &request.query);
    info!(
        "Guidance search: category={} set={} results={}",
        request.category,
        classification.set,
        classification.results.len()
    );

    Ok(Json(SearchResponse {
        results: classification.results,
    }))
}
