//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Storage error taxonomy
//! - [`repositories`] - The storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on the HTTP layer.

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::{BatchError, StorageError};
