//! Axum route handlers for the Application Submission Flow.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use crate::applications::upload::{read_application, validate_file};
use crate::errors::AppError;
use crate::models::application::ApplicationResult;
use crate::state::AppState;

/// POST /api/applications
///
/// Accepts a multipart submission with a required `resume` document and an
/// optional `cover_letter`, forwards it to the HR service, and relays the
/// analysis result. Validation failures never reach the upstream.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ApplicationResult>, AppError> {
    let upload = read_application(multipart).await?;

    let resume = upload
        .resume
        .ok_or_else(|| AppError::Validation("Please upload your resume".to_string()))?;
    validate_file("resume", &resume)?;

    if let Some(cover_letter) = &upload.cover_letter {
        validate_file("cover letter", cover_letter)?;
    }

    // Correlation id for the log trail; the submission itself is stateless.
    let submission_id = Uuid::new_v4();
    info!(
        %submission_id,
        resume = %resume.filename,
        has_cover_letter = upload.cover_letter.is_some(),
        "Submitting application"
    );

    let result = state
        .hr
        .submit_application(resume, upload.cover_letter)
        .await?;

    info!(%submission_id, status = %result.status, "Application processed");

    Ok(Json(result))
}
