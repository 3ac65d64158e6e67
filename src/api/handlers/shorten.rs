//! Handlers for the single-link shortening endpoints.

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::{CurrentUser, ShortenOutcome};
use crate::error::AppError;
use crate::state::AppState;

fn status_for(outcome: &ShortenOutcome) -> StatusCode {
    if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::CONFLICT
    }
}

/// Shortens a URL sent as the raw request body.
///
/// # Endpoint
///
/// `POST /`
///
/// The link is recorded for the current cookie user, so it later shows up
/// in `GET /api/user/urls`.
///
/// # Response
///
/// The absolute short URL as `text/plain`, with:
///
/// - **201 Created** when the link is new
/// - **409 Conflict** when the URL was already shortened (same body)
///
/// # Errors
///
/// Returns 400 Bad Request if the body is blank.
pub async fn shorten_text_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state
        .link_service
        .shorten(&body, Some(user.user_id))
        .await?;

    Ok((
        status_for(&outcome),
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.link_service.short_url(outcome.short_code()),
    ))
}

/// Shortens a URL sent as JSON.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://practicum.yandex.ru" }
/// ```
///
/// # Response
///
/// ```json
/// { "result": "http://localhost:8080/2138586483" }
/// ```
///
/// 201 Created for a new link, 409 Conflict with the same body otherwise.
///
/// # Errors
///
/// Returns 400 Bad Request if the content type is not JSON, the body does
/// not parse, or `url` is empty.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let outcome = state.link_service.shorten(&payload.url, None).await?;

    let response = ShortenResponse {
        result: state.link_service.short_url(outcome.short_code()),
    };

    Ok((status_for(&outcome), Json(response)))
}
