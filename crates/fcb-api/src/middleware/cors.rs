use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer for the configured origins
///
/// An empty list allows any origin. Origins that are not valid header values
/// are skipped with a warning.
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    // `ALLOWED_ORIGINS=""` arrives as a single empty entry
    if allowed_origins.iter().all(|origin| origin.trim().is_empty()) {
        return CorsLayer::very_permissive();
    }

    let origins = allowed_origins
        .iter()
        .filter(|origin| !origin.trim().is_empty())
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
}
