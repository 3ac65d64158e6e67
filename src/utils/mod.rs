//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Deterministic short code derivation
//! - [`cookies`] - Cookie header parsing and building

pub mod code_generator;
pub mod cookies;
