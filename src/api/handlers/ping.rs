//! Handler for the storage liveness endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::PingResponse;
use crate::state::AppState;

/// Checks that the configured storage is reachable.
///
/// # Endpoint
///
/// `GET /ping`
///
/// # Response Codes
///
/// - **200 OK**: storage answered
/// - **500 Internal Server Error**: storage check failed
///
/// ```json
/// { "status": "ok", "version": "0.1.0" }
/// ```
pub async fn ping_handler(
    State(state): State<AppState>,
) -> Result<Json<PingResponse>, (StatusCode, Json<PingResponse>)> {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.link_service.ping().await {
        Ok(()) => Ok(Json(PingResponse {
            status: "ok".to_string(),
            version,
            message: None,
        })),
        Err(_) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(PingResponse {
                status: "error".to_string(),
                version,
                message: Some("Storage is unavailable".to_string()),
            }),
        )),
    }
}
