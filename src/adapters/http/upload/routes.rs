//! HTTP routes for the upload proxy.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::{upload_image, UploadAppState};

/// Creates the upload router, accepting bodies up to `max_upload_bytes`.
pub fn upload_routes(state: UploadAppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/upload", post(upload_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::memory::MockImageHost;
    use crate::ports::ImageHostError;

    const BOUNDARY: &str = "----portfolio-boundary";
    const LIMIT: usize = 1024 * 1024;

    fn multipart_body(field: &str, file_name: &str, content: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn uploads_file_and_returns_url() {
        let host = MockImageHost::new();
        let app = upload_routes(UploadAppState::new(Arc::new(host.clone())), LIMIT);

        let response = app
            .oneshot(request(multipart_body("file", "beach.jpg", b"jpeg-bytes")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert!(!json["url"].as_str().unwrap().is_empty());

        let uploads = host.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(
            uploads[0].image,
            crate::ports::ImageUpload::bytes(b"jpeg-bytes".to_vec())
                .with_file_name("beach.jpg")
                .with_content_type("image/jpeg")
        );
    }

    #[tokio::test]
    async fn missing_file_field_fails() {
        let host = MockImageHost::new();
        let app = upload_routes(UploadAppState::new(Arc::new(host.clone())), LIMIT);

        let response = app
            .oneshot(request(multipart_body("avatar", "beach.jpg", b"jpeg-bytes")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Upload to Cloudinary failed");
        assert!(host.uploads().is_empty());
    }

    #[tokio::test]
    async fn non_multipart_request_fails() {
        let app = upload_routes(UploadAppState::new(Arc::new(MockImageHost::new())), LIMIT);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Upload to Cloudinary failed");
    }

    #[tokio::test]
    async fn host_failure_fails() {
        let host = MockImageHost::failing(ImageHostError::AuthenticationFailed(
            "Invalid Signature".to_string(),
        ));
        let app = upload_routes(UploadAppState::new(Arc::new(host)), LIMIT);

        let response = app
            .oneshot(request(multipart_body("file", "beach.jpg", b"jpeg-bytes")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Upload to Cloudinary failed");
    }

    #[tokio::test]
    async fn empty_file_fails() {
        let app = upload_routes(UploadAppState::new(Arc::new(MockImageHost::new())), LIMIT);

        let response = app
            .oneshot(request(multipart_body("file", "empty.jpg", b"")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
