//! Infrastructure layer for external integrations.
//!
//! Implements the domain [`crate::domain::repositories::Storage`] trait.
//!
//! # Modules
//!
//! - [`persistence`] - Memory, JSON file and PostgreSQL storage backends
pub mod persistence;
