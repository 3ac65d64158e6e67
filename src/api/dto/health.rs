//! DTOs for the ping endpoint.

use serde::{Deserialize, Serialize};

/// Storage liveness report.
#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
