//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::code_generator::generate_short_code;

/// A shortened URL link.
///
/// The `short_code` is always derived from `long_url`, so two links built
/// from the same URL carry the same code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link for `long_url`, deriving its short code.
    pub fn new(long_url: impl Into<String>) -> Self {
        let long_url = long_url.into();
        Self {
            short_code: generate_short_code(&long_url),
            long_url,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_derives_code_from_url() {
        let link = Link::new("aaa");

        assert_eq!(link.short_code, "1184641920");
        assert_eq!(link.long_url, "aaa");
    }

    #[test]
    fn test_same_url_same_code() {
        let first = Link::new("https://example.com");
        let second = Link::new("https://example.com");

        assert_eq!(first.short_code, second.short_code);
    }
}
