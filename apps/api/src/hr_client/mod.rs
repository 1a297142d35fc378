/// HR Client — the single point of entry for all upstream HR service calls.
///
/// ARCHITECTURAL RULE: No other module may call the HR service directly.
/// Both intake flows MUST forward through this module — it owns the base
/// URL and logs 5xx payloads before handing the error back. No retries,
/// no backoff; this is observability glue, not resilience machinery.
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::application::ApplicationResult;
use crate::models::interview::ConfirmationResult;

const APPLICATIONS_ENDPOINT: &str = "/api/applications";
const CONFIRM_ENDPOINT: &str = "/api/interview/confirm";

#[derive(Debug, Error)]
pub enum HrClientError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HR service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode HR service response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A document accepted from the candidate, held in memory for the lifetime
/// of one forwarded request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// The single upstream client shared by all handlers.
#[derive(Clone)]
pub struct HrClient {
    client: Client,
    base_url: String,
}

impl HrClient {
    /// Creates a client for the upstream HR service. No request timeout is
    /// configured; a hung upstream holds the request.
    pub fn new(base_url: String) -> Result<Self, HrClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submits an application as multipart form data: exactly one `resume`
    /// part and, when the candidate provided one, a `cover_letter` part.
    pub async fn submit_application(
        &self,
        resume: UploadedFile,
        cover_letter: Option<UploadedFile>,
    ) -> Result<ApplicationResult, HrClientError> {
        let url = format!("{}{}", self.base_url, APPLICATIONS_ENDPOINT);
        let form = build_application_form(resume, cover_letter)?;

        debug!("Forwarding application to {url}");
        let response = self.client.post(&url).multipart(form).send().await?;

        decode(response).await
    }

    /// Confirms an interview slot for an opaque token. The token goes into
    /// the request path untouched; one attempt, no retry.
    pub async fn confirm_interview(
        &self,
        token: &str,
    ) -> Result<ConfirmationResult, HrClientError> {
        let url = format!("{}{}/{}", self.base_url, CONFIRM_ENDPOINT, token);

        debug!("Forwarding interview confirmation to {url}");
        let response = self.client.post(&url).send().await?;

        decode(response).await
    }
}

/// Checks the response status and decodes the JSON body. A 5xx payload is
/// logged here before the error propagates; every other error status passes
/// through unchanged.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, HrClientError> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(HrClientError::Decode);
    }

    let body = response.text().await.unwrap_or_default();
    if status.is_server_error() {
        error!("HR service server error ({status}): {body}");
    }

    Err(HrClientError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Part keys for an application submission, in forwarding order.
fn application_parts(
    resume: UploadedFile,
    cover_letter: Option<UploadedFile>,
) -> Vec<(&'static str, UploadedFile)> {
    let mut parts = vec![("resume", resume)];
    if let Some(cover_letter) = cover_letter {
        parts.push(("cover_letter", cover_letter));
    }
    parts
}

fn build_application_form(
    resume: UploadedFile,
    cover_letter: Option<UploadedFile>,
) -> Result<Form, HrClientError> {
    let mut form = Form::new();
    for (name, file) in application_parts(resume, cover_letter) {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.filename)
            .mime_str(&file.content_type)?;
        form = form.part(name, part);
    }
    Ok(form)
}
