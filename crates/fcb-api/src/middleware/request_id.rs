//! Request ID middleware.
//!
//! Every request runs inside a `request` span carrying its id, so all log
//! lines of one request can be correlated. The id is echoed back in the
//! response headers.

use axum::{
    extract::Request,
    http::{HeaderValue, header::HeaderName},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for the request ID
const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Middleware to add request ID to each request
///
/// If the client provides an X-Request-ID header, it will be preserved.
/// Otherwise, a new UUID will be generated.
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    let mut response = next.run(req).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), header_value);
    }

    response
}
