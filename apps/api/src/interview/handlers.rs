//! Axum route handlers for the Interview Confirmation Flow.

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::interview::confirmation::{build_view, ConfirmationView};
use crate::state::AppState;

/// POST /api/interview/confirm/:token
///
/// Forwards the opaque token to the HR service exactly once and renders the
/// outcome. The caller always receives a renderable panel — every failure
/// collapses to the fixed fallback message, never the underlying cause.
/// The token itself is kept out of the logs.
pub async fn handle_confirm_interview(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Json<ConfirmationView> {
    info!("Confirming interview slot");

    let outcome = state.hr.confirm_interview(&token).await;
    let view = build_view(outcome);

    info!(status = %view.status, "Interview confirmation rendered");

    Json(view)
}
