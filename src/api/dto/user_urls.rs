//! DTOs for the user link listing endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::UserUrl;

/// One link saved by the current user.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserUrlItem {
    pub short_url: String,
    pub original_url: String,
}

impl From<UserUrl> for UserUrlItem {
    fn from(url: UserUrl) -> Self {
        Self {
            short_url: url.short_url,
            original_url: url.original_url,
        }
    }
}
