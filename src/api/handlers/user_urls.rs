//! Handler for listing the current user's links.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::user_urls::UserUrlItem;
use crate::application::services::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the links saved by the user identified by the request cookies.
///
/// # Endpoint
///
/// `GET /api/user/urls`
///
/// # Response
///
/// ```json
/// [
///   { "short_url": "http://localhost:8080/2138586483", "original_url": "https://ya.ru" }
/// ]
/// ```
///
/// Returns 204 No Content when the request carried no valid cookie pair or
/// the user has not saved any links.
pub async fn user_urls_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    if !user.authenticated {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let urls = state.link_service.user_urls(&user.user_id).await?;
    if urls.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let items: Vec<UserUrlItem> = urls.into_iter().map(UserUrlItem::from).collect();

    Ok(Json(items).into_response())
}
