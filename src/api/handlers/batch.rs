//! Handler for batch shortening.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::batch::{BatchRequestItem, BatchResponseItem};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a list of URLs in one request.
///
/// # Endpoint
///
/// `POST /api/shorten/batch`
///
/// # Request Body
///
/// ```json
/// [
///   { "correlation_id": "111", "original_url": "http://lelik.ru" },
///   { "correlation_id": "222", "original_url": "http://bolik.ru" }
/// ]
/// ```
///
/// # Response
///
/// `201 Created` with one item per input, in input order:
///
/// ```json
/// [
///   { "correlation_id": "111", "short_url": "http://localhost:8080/3799407019" },
///   { "correlation_id": "222", "short_url": "http://localhost:8080/2114288767" }
/// ]
/// ```
///
/// URLs that were already shortened are not an error here.
///
/// # Errors
///
/// Returns 400 Bad Request on malformed JSON or a blank `original_url`.
/// Returns 500 Internal Server Error if storage fails.
pub async fn shorten_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<BatchRequestItem>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<BatchResponseItem>>), AppError> {
    let Json(records) = payload?;

    let output = state.link_service.shorten_batch(records).await?;
    tracing::debug!(count = output.len(), "Batch shortened");

    Ok((StatusCode::CREATED, Json(output)))
}
