use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured assessment of a candidate, produced entirely by the upstream
/// HR service. The gateway relays it without interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// Education assessment; shape is owned by the upstream service.
    #[serde(default)]
    pub education: Value,
    /// Experience assessment; shape is owned by the upstream service.
    #[serde(default)]
    pub experience: Value,
    /// Skills assessment. Order is meaningful and must survive the relay.
    pub skills: Vec<String>,
    pub overall_assessment: String,
    pub recommendation: String,
}

/// Result of submitting an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResult {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ResumeAnalysis>,
    pub message: String,
}
