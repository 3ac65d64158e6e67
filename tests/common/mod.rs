#![allow(dead_code)]

use axum_test::{TestResponse, TestServer};
use std::sync::Arc;
use url_shortener::application::services::{AuthService, LinkService};
use url_shortener::domain::repositories::Storage;
use url_shortener::infrastructure::persistence::MemoryStorage;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";
pub const COOKIE_SALT: &str = "test-signing-secret";
pub const COOKIE_TTL: u64 = 3600;

pub fn create_test_state(storage: Arc<dyn Storage>) -> AppState {
    let link_service = Arc::new(LinkService::new(storage.clone(), BASE_URL));
    let auth_service = Arc::new(AuthService::new(storage, COOKIE_SALT));

    AppState::new(link_service, auth_service, COOKIE_TTL)
}

/// Full application (routes and middleware) over a fresh in-memory store.
pub fn create_test_server() -> TestServer {
    create_test_server_with(Arc::new(MemoryStorage::new()))
}

pub fn create_test_server_with(storage: Arc<dyn Storage>) -> TestServer {
    TestServer::new(app_router(create_test_state(storage))).unwrap()
}

/// Builds a `Cookie` header value replaying the user cookies set by `response`.
pub fn user_cookies(response: &TestResponse) -> String {
    format!(
        "user_id={}; user_token={}",
        response.cookie("user_id").value(),
        response.cookie("user_token").value()
    )
}
