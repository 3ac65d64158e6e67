//! API route configuration.

use crate::api::handlers::{shorten_batch_handler, shorten_handler, user_urls_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`        - Shorten one URL
/// - `POST /shorten/batch`  - Shorten a list of URLs
/// - `GET  /user/urls`      - Links saved by the cookie user
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shorten/batch", post(shorten_batch_handler))
        .route("/user/urls", get(user_urls_handler))
}
