//! Multipart extraction and validation for application uploads.

use axum::extract::Multipart;

use crate::errors::AppError;
use crate::hr_client::UploadedFile;

/// Accepted document extensions — the accept filter of the intake form,
/// enforced at the gateway boundary.
const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

/// Per-file upload cap.
pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

/// The two recognized upload fields of an application submission.
#[derive(Debug, Default)]
pub struct ApplicationUpload {
    pub resume: Option<UploadedFile>,
    pub cover_letter: Option<UploadedFile>,
}

/// Drains the multipart stream into an `ApplicationUpload`.
/// Unknown parts are skipped; a repeated part keeps the first occurrence.
pub async fn read_application(mut multipart: Multipart) -> Result<ApplicationUpload, AppError> {
    let mut upload = ApplicationUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        let slot = match name.as_str() {
            "resume" => &mut upload.resume,
            "cover_letter" => &mut upload.cover_letter,
            _ => continue,
        };
        if slot.is_some() {
            continue;
        }

        let filename = field.file_name().unwrap_or(name.as_str()).to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read `{name}` upload: {e}")))?;

        *slot = Some(UploadedFile {
            filename,
            content_type,
            bytes,
        });
    }

    Ok(upload)
}

/// Validates one uploaded document against the accept filter and size cap.
pub fn validate_file(label: &str, file: &UploadedFile) -> Result<(), AppError> {
    if file.bytes.is_empty() {
        return Err(AppError::Validation(format!("Uploaded {label} is empty")));
    }

    let lower = file.filename.to_lowercase();
    if !ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return Err(AppError::Validation(format!(
            "Only PDF and Word documents are accepted for the {label}; received {:?}",
            file.filename
        )));
    }

    if file.bytes.len() > MAX_FILE_BYTES {
        return Err(AppError::Validation(format!(
            "Uploaded {label} exceeds the 10MB limit"
        )));
    }

    Ok(())
}
