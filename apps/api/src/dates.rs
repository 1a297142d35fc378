//! Display formatting for upstream timestamps.

use chrono::{DateTime, Utc};
use tracing::error;

/// Renders an ISO-8601 timestamp for display, e.g. `Jan 15, 2024 10:00`.
/// Fails soft: an unparseable input is logged and returned unchanged.
pub fn format_date(date: &str) -> String {
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => parsed.format("%b %d, %Y %H:%M").to_string(),
        Err(e) => {
            error!("Invalid date format {date:?}: {e}");
            date.to_string()
        }
    }
}

/// True when `date` is strictly earlier than now.
pub fn is_past_date(date: DateTime<Utc>) -> bool {
    date < Utc::now()
}
