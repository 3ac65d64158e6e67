//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without storage concerns.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code to long URL mapping
//! - [`User`] - An anonymous cookie-identified user
//! - [`BatchInput`] / [`BatchOutput`] - Records of a batch shortening request

pub mod batch;
pub mod link;
pub mod user;

pub use batch::{BatchInput, BatchOutput};
pub use link::Link;
pub use user::User;
