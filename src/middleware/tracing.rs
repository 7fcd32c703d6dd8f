// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span carrying the x-request-id set by the request-id layer

use axum::body::Body;
use axum::http::Request;
use tracing::Span;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory for `TraceLayer::make_span_with`
///
/// Runs after `SetRequestIdLayer`, so the id header is always present for
/// requests that came through the full stack.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
