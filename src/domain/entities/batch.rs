//! Batch shortening records.

use serde::{Deserialize, Serialize};

/// One URL submitted in a batch, tagged with a caller-chosen correlation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchInput {
    pub correlation_id: String,
    pub original_url: String,
}

/// Result for one [`BatchInput`], in the same position as its input.
///
/// `short_url` holds the bare short code when returned from storage; the
/// HTTP layer rewrites it into an absolute link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutput {
    pub correlation_id: String,
    pub short_url: String,
}

impl BatchInput {
    pub fn new(correlation_id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            original_url: original_url.into(),
        }
    }
}
