pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::batch::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills", get(handlers::handle_get_skills))
        .route("/api/v1/resumes/parse", post(handlers::handle_parse))
        .route("/api/v1/resumes/export", post(handlers::handle_export))
        .route(
            "/api/v1/resumes/parse-text",
            post(handlers::handle_parse_text),
        )
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extraction::docx::fixtures::docx_bytes;
    use crate::parsing::ResumeParser;

    const BOUNDARY: &str = "resume-parser-test-boundary";

    fn app() -> Router {
        build_router(AppState::new(Config::default(), ResumeParser::default()))
    }

    fn app_with_limit(max_upload_bytes: usize) -> Router {
        let config = Config {
            max_upload_bytes,
            ..Config::default()
        };
        build_router(AppState::new(config, ResumeParser::default()))
    }

    fn multipart_body(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (filename, content) in files {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload(uri: &str, files: &[(&str, &[u8])]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(files)))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["ner_backend"], "rules");
        assert_eq!(body["skills_loaded"], 14);
    }

    #[tokio::test]
    async fn test_skills_lists_default_vocabulary() {
        let response = app()
            .oneshot(Request::get("/api/v1/skills").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        let skills = body["skills"].as_array().unwrap();
        assert_eq!(skills.len(), 14);
        assert_eq!(skills[0], "python");
    }

    #[tokio::test]
    async fn test_parse_upload_returns_records_in_order() {
        let first = docx_bytes(&["Jane Doe", "jane@x.io", "+44 20 7946 0958", "Python and SQL"]);
        let second = docx_bytes(&["John Roe", "john@y.io"]);
        let response = app()
            .oneshot(upload(
                "/api/v1/resumes/parse",
                &[("jane.docx", &first), ("john.DOCX", &second)],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Name"], "Jane Doe");
        assert_eq!(records[0]["Email"], "jane@x.io");
        assert_eq!(records[0]["Phone"], "+44 20 7946 0958");
        assert_eq!(records[0]["Skills"], "python, sql");
        assert_eq!(records[0]["Filename"], "jane.docx");
        assert_eq!(records[1]["Filename"], "john.DOCX");
        assert!(body["failures"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_file_is_reported_not_fatal() {
        let good = docx_bytes(&["Jane Doe"]);
        let response = app()
            .oneshot(upload(
                "/api/v1/resumes/parse",
                &[("broken.pdf", b"garbage"), ("jane.docx", &good)],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["records"].as_array().unwrap().len(), 1);
        assert_eq!(body["failures"][0]["filename"], "broken.pdf");
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let response = app()
            .oneshot(upload(
                "/api/v1/resumes/parse",
                &[("resume.txt", b"Jane Doe jane@x.io")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("resume.txt"));
    }

    #[tokio::test]
    async fn test_upload_without_files_is_rejected() {
        let response = app()
            .oneshot(upload("/api/v1/resumes/parse", &[]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let big = vec![b'x'; 4096];
        let response = app_with_limit(1024)
            .oneshot(upload("/api/v1/resumes/parse", &[("big.pdf", &big)]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_export_returns_csv_attachment() {
        let resume = docx_bytes(&["Jane Doe", "jane@x.io", "Skills: Flask, CSS"]);
        let response = app()
            .oneshot(upload("/api/v1/resumes/export", &[("jane.docx", &resume)]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"parsed_resumes.csv\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Name,Email,Phone,Skills,Filename"));
        assert_eq!(
            lines.next(),
            Some("Jane Doe,jane@x.io,,\"css, flask\",jane.docx")
        );
        assert_eq!(lines.next(), None);
    }

    #[tokio::test]
    async fn test_parse_text_endpoint() {
        let request = Request::post("/api/v1/resumes/parse-text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"filename":"pasted.txt","text":"Experienced in Python, SQL and Machine Learning projects"}"#,
            ))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["Skills"], "python, sql, machine learning");
        assert_eq!(body["Email"], "");
        assert_eq!(body["Filename"], "pasted.txt");
    }

    #[tokio::test]
    async fn test_parse_text_requires_filename() {
        let request = Request::post("/api/v1/resumes/parse-text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"filename":"  ","text":"Jane Doe"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
