pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::application::handlers::handle_apply_job;
use crate::page::handle_index;
use crate::state::AppState;
use crate::tailoring::handlers::handle_edit_resume;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(health::health_handler))
        .route("/api/edit-resume", post(handle_edit_resume))
        .route("/api/apply-job", post(handle_apply_job))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::application::applicant::SimulatedApplicant;
    use crate::config::Config;

    const BOUNDARY: &str = "tailor-test-boundary";

    const RESUME: &str = "Jane Doe\n\nExperience\nAcme\n- Shipped Rust services\n\nSkills\nGo, Rust\n";
    const JD: &str = "Rust engineer wanted. Rust and more Rust.";

    fn test_router(config: Config) -> Router {
        build_router(AppState {
            config,
            applicant: Arc::new(SimulatedApplicant::new(Duration::ZERO)),
        })
    }

    fn app() -> Router {
        test_router(Config::default())
    }

    fn multipart_body(resume: Option<(&str, &str)>, job_description: Option<&str>) -> String {
        let mut body = String::new();
        if let Some((file_name, content)) = resume {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\nContent-Type: text/plain\r\n\r\n{content}\r\n"
            ));
        }
        if let Some(jd) = job_description {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"jobDescription\"\r\n\r\n{jd}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    fn multipart_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/edit-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_serves_form_page() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Job Application Automation"));
        assert!(html.contains("/api/edit-resume"));
        assert!(html.contains("/api/apply-job"));
    }

    #[tokio::test]
    async fn test_edit_resume_multipart_upload() {
        let response = app()
            .oneshot(multipart_request(multipart_body(
                Some(("resume.txt", RESUME)),
                Some(JD),
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        let edited = body["editedResume"].as_str().unwrap();
        assert!(edited.starts_with("PROFESSIONAL SUMMARY\n"));
        assert!(edited.contains("KEY SKILLS\n• Rust\n• Go\n\n"));
        assert!(edited.contains("• Shipped Rust services ⭐"));
        assert_eq!(body["keywords"][0]["keyword"], "rust");
        assert_eq!(body["keywords"][0]["frequency"], 3);
    }

    #[tokio::test]
    async fn test_edit_resume_accepts_json_body() {
        let response = app()
            .oneshot(json_request(
                "/api/edit-resume",
                json!({ "resume": RESUME, "jobDescription": JD }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["editedResume"]
            .as_str()
            .unwrap()
            .contains("PROFESSIONAL EXPERIENCE"));
    }

    #[tokio::test]
    async fn test_edit_resume_missing_job_description_is_bad_request() {
        let response = app()
            .oneshot(multipart_request(multipart_body(
                Some(("resume.txt", RESUME)),
                None,
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing resume or job description");
    }

    #[tokio::test]
    async fn test_edit_resume_empty_file_is_still_tailored() {
        let response = app()
            .oneshot(multipart_request(multipart_body(
                Some(("resume.txt", "")),
                Some(JD),
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        let edited = body["editedResume"].as_str().unwrap();
        assert!(edited.starts_with("PROFESSIONAL SUMMARY\n"));
        assert!(edited.contains("KEY SKILLS\n"));
    }

    #[tokio::test]
    async fn test_edit_resume_pdf_upload() {
        let pdf = std::str::from_utf8(include_bytes!("../../tests/fixtures/resume.pdf")).unwrap();
        let response = app()
            .oneshot(multipart_request(multipart_body(
                Some(("resume.pdf", pdf)),
                Some(JD),
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["editedResume"]
            .as_str()
            .unwrap()
            .contains("PROFESSIONAL SUMMARY"));
    }

    #[tokio::test]
    async fn test_edit_resume_corrupt_pdf_is_server_error() {
        let response = app()
            .oneshot(multipart_request(multipart_body(
                Some(("resume.pdf", "%PDF-1.4\nthis is not really a pdf\n")),
                Some(JD),
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to edit resume");
    }

    #[tokio::test]
    async fn test_edit_resume_missing_resume_is_bad_request() {
        let response = app()
            .oneshot(multipart_request(multipart_body(None, Some(JD))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_edit_resume_malformed_body_is_server_error() {
        let response = app()
            .oneshot(json_request("/api/edit-resume", json!("not an object")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to edit resume");
    }

    #[tokio::test]
    async fn test_apply_job_returns_application_id() {
        let response = app()
            .oneshot(json_request(
                "/api/apply-job",
                json!({ "resume": "PROFESSIONAL SUMMARY\n...", "jobDescription": JD }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Application submitted successfully");
        assert!(body["applicationId"].as_str().unwrap().starts_with("APP-"));
    }

    #[tokio::test]
    async fn test_apply_job_accepts_urlencoded_form() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/apply-job")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("resume=Jane+Doe&jobDescription=Rust+engineer"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_apply_job_empty_resume_is_bad_request() {
        let response = app()
            .oneshot(json_request(
                "/api/apply-job",
                json!({ "resume": "", "jobDescription": JD }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing resume or job description");
    }

    #[tokio::test]
    async fn test_apply_job_oversized_body_fails() {
        let config = Config {
            max_upload_bytes: 64,
            ..Config::default()
        };
        let response = test_router(config)
            .oneshot(json_request(
                "/api/apply-job",
                json!({ "resume": "x".repeat(500), "jobDescription": JD }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to submit application");
    }
}
