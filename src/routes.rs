//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`         - Shorten a URL from a plain-text body
//! - `GET  /{code}`   - Short link redirect
//! - `GET  /ping`     - Storage liveness check
//! - `/api/*`         - JSON API
//!
//! # Middleware
//!
//! - **User cookie** - Signed anonymous identity on every request
//! - **Compression** - Gzip request and response bodies
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{ping_handler, redirect_handler, shorten_text_handler};
use crate::api::middleware::{compression, tracing, user_cookie};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(shorten_text_handler))
        .route("/ping", get(ping_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_cookie::layer,
        ))
        .with_state(state)
        .layer(compression::response_layer())
        .layer(compression::request_layer())
        .layer(tracing::layer())
}
