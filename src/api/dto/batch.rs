//! DTOs for the batch shortening endpoint.
//!
//! The wire format is a bare JSON array of records:
//!
//! ```json
//! [{ "correlation_id": "111", "original_url": "http://lelik.ru" }]
//! ```
//!
//! and the response mirrors it with `short_url` in place of `original_url`.

pub use crate::domain::entities::{BatchInput as BatchRequestItem, BatchOutput as BatchResponseItem};
