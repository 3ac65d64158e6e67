//! HTTP middleware for request processing.
//!
//! Provides user identity, compression, and observability middleware.

pub mod compression;
pub mod tracing;
pub mod user_cookie;
