use serde::{Deserialize, Serialize};

/// Outcome of a confirmation attempt as returned by the upstream service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationResult {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Scheduled interview time as an ISO-8601 string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}
