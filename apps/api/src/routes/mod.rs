pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::applications::handlers::handle_submit_application;
use crate::interview::handlers::handle_confirm_interview;
use crate::state::AppState;

/// Body cap for the intake route: two full-size documents plus multipart framing.
const MAX_BODY_BYTES: usize = 21 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Application Submission Flow
        .route(
            "/api/applications",
            post(handle_submit_application).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        // Interview Confirmation Flow
        .route(
            "/api/interview/confirm/:token",
            post(handle_confirm_interview),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::hr_client::HrClient;

    const BOUNDARY: &str = "intake-test-boundary";

    /// Router wired to an unroutable upstream: any request that escapes
    /// validation fails with a transport error instead of leaving the host.
    fn test_router() -> Router {
        let hr = HrClient::new("http://127.0.0.1:9".to_string()).expect("client");
        build_router(AppState { hr })
    }

    fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, filename, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn submission_request(parts: &[(&str, &str, &[u8])]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/applications")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_missing_resume_is_rejected_before_forwarding() {
        // Only a cover letter: validation must fail without an upstream request.
        let response = test_router()
            .oneshot(submission_request(&[(
                "cover_letter",
                "letter.pdf",
                b"%PDF-1.4",
            )]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Please upload your resume");
    }

    #[tokio::test]
    async fn test_unsupported_resume_extension_is_rejected() {
        let response = test_router()
            .oneshot(submission_request(&[("resume", "resume.txt", b"plain")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_parts_are_ignored_but_resume_still_required() {
        let response = test_router()
            .oneshot(submission_request(&[("attachment", "x.pdf", b"%PDF-1.4")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"]["message"], "Please upload your resume");
    }

    #[tokio::test]
    async fn test_valid_submission_with_dead_upstream_maps_to_generic_failure() {
        let response = test_router()
            .oneshot(submission_request(&[("resume", "resume.pdf", b"%PDF-1.4")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Failed to process application. Please try again."
        );
    }

    #[tokio::test]
    async fn test_failed_confirmation_renders_fixed_fallback_panel() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/interview/confirm/abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // The flow always yields a renderable panel, whatever went wrong.
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(
            json["message"],
            "Failed to confirm interview. Please contact HR."
        );
    }
}
