//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::config::Config;
use crate::domain::repositories::Storage;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    pub cookie_ttl_seconds: u64,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        auth_service: Arc<AuthService>,
        cookie_ttl_seconds: u64,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            cookie_ttl_seconds,
        }
    }

    /// Wires both services around a single storage backend.
    pub fn from_config(storage: Arc<dyn Storage>, config: &Config) -> Self {
        let link_service = Arc::new(LinkService::new(storage.clone(), config.base_url.clone()));
        let auth_service = Arc::new(AuthService::new(storage, config.cookie_salt.clone()));

        Self::new(link_service, auth_service, config.cookie_ttl_seconds)
    }
}
