//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod batch;
pub mod health;
pub mod shorten;
pub mod user_urls;
