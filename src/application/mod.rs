//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::Storage`] trait and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening, expansion, user listings and batches
//! - [`services::auth_service::AuthService`] - Signed-cookie user identity

pub mod services;
