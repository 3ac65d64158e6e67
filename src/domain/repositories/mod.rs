//! Repository trait definitions for the domain layer.
//!
//! The [`Storage`] trait abstracts every persistence operation the service
//! needs. Implementations live in `crate::infrastructure::persistence` and
//! a mock is generated via `mockall` for unit tests.

pub mod storage;

pub use storage::Storage;

#[cfg(test)]
pub use storage::MockStorage;
