//! Mapping of upstream confirmation outcomes into a renderable view.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::dates::{format_date, is_past_date};
use crate::hr_client::HrClientError;
use crate::models::interview::ConfirmationResult;

/// Fixed message returned for every failed confirmation attempt.
/// The underlying cause is logged, never surfaced to the caller.
pub const CONFIRMATION_FALLBACK_MESSAGE: &str = "Failed to confirm interview. Please contact HR.";

/// Renderable outcome of one confirmation attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationView {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// `time` rendered for display, e.g. `Jan 15, 2024 10:00`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_time: Option<String>,
    /// True when the scheduled slot is already in the past.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}

/// Maps one confirmation attempt into its view. Failures of any kind
/// collapse into the fixed fallback panel.
pub fn build_view(outcome: Result<ConfirmationResult, HrClientError>) -> ConfirmationView {
    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            error!("Interview confirmation failed: {e}");
            return fallback_view();
        }
    };

    let formatted_time = result.time.as_deref().map(format_date);
    let expired = result
        .time
        .as_deref()
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| is_past_date(t.with_timezone(&Utc)));

    ConfirmationView {
        status: result.status,
        message: result.message,
        event_id: result.event_id,
        time: result.time,
        formatted_time,
        expired,
    }
}

fn fallback_view() -> ConfirmationView {
    ConfirmationView {
        status: "error".to_string(),
        message: CONFIRMATION_FALLBACK_MESSAGE.to_string(),
        event_id: None,
        time: None,
        formatted_time: None,
        expired: None,
    }
}
