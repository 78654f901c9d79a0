//! Request tracing middleware.
//!
//! Wraps every route uniformly, error responses included: assigns each
//! request a fresh tracing identifier, measures wall-clock handler time,
//! stamps both onto the response headers, and feeds the request into the
//! metrics layer.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;
use uuid::Uuid;

use crate::metrics;

/// Response header carrying the per-request tracing identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
/// Response header carrying the elapsed handler time in decimal seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Trace one request: log start/completion, time the dispatch, and attach
/// the tracing headers.
pub async fn track_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    info!(request_id = %request_id, method = %method, path = %path, "request started");
    let start = Instant::now();

    let mut response = next.run(request).await;

    let elapsed_secs = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed_secs:.6}")) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    metrics::record_request(&method, &path, status, elapsed_secs);
    info!(
        request_id = %request_id,
        status = status,
        duration_secs = elapsed_secs,
        "request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn traced_app() -> Router {
        Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route(
                "/missing",
                get(|| async { StatusCode::NOT_FOUND }),
            )
            .layer(axum::middleware::from_fn(track_request))
    }

    #[tokio::test]
    async fn success_responses_carry_tracing_headers() {
        let response = traced_app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/ok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let request_id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(!request_id.to_str().unwrap().is_empty());

        let process_time = response.headers().get(PROCESS_TIME_HEADER).unwrap();
        let seconds: f64 = process_time.to_str().unwrap().parse().unwrap();
        assert!(seconds >= 0.0);
    }

    #[tokio::test]
    async fn error_responses_carry_tracing_headers() {
        let response = traced_app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert!(response.headers().contains_key(PROCESS_TIME_HEADER));
    }

    #[tokio::test]
    async fn tracing_identifiers_are_unique_per_request() {
        let app = traced_app();

        let first = app
            .clone()
            .oneshot(
                HttpRequest::builder()
                    .uri("/ok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let second = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/ok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_ne!(
            first.headers().get(REQUEST_ID_HEADER),
            second.headers().get(REQUEST_ID_HEADER)
        );
    }
}
