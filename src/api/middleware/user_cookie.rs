//! Signed user cookie middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::SET_COOKIE},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies::{build_cookie, read_cookie};

pub const USER_ID_COOKIE: &str = "user_id";
pub const USER_TOKEN_COOKIE: &str = "user_token";

/// Resolves the request user from its cookies.
///
/// # Flow
///
/// 1. Read `user_id` and `user_token` cookies
/// 2. Keep the user if the token is the HMAC of the id, otherwise create one
/// 3. Insert [`CurrentUser`](crate::application::services::CurrentUser) into request extensions
/// 4. Set both cookies on the response
///
/// # Errors
///
/// Returns 500 Internal Server Error if a new user cannot be created.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", post(shorten_text_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), user_cookie::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = read_cookie(req.headers(), USER_ID_COOKIE);
    let token = read_cookie(req.headers(), USER_TOKEN_COOKIE);

    let user = st
        .auth_service
        .identify(user_id.as_deref(), token.as_deref())
        .await?;

    let cookies = [
        build_cookie(USER_ID_COOKIE, &user.user_id, st.cookie_ttl_seconds),
        build_cookie(USER_TOKEN_COOKIE, &user.token, st.cookie_ttl_seconds),
    ];

    req.extensions_mut().insert(user);
    let mut response = next.run(req).await;

    for cookie in cookies {
        let value = HeaderValue::from_str(&cookie).map_err(|e| {
            tracing::error!(error = %e, "Invalid cookie value");
            AppError::internal("internal error", json!({}))
        })?;
        response.headers_mut().append(SET_COOKIE, value);
    }

    Ok(response)
}
