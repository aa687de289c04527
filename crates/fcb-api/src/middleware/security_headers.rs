use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
};

use crate::config::Environment;

const BASE_HEADERS: [(&str, &str); 3] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "no-referrer"),
];

const HSTS: &str = "max-age=31536000; includeSubDomains";

/// Adds the security headers to every response.
///
/// HSTS is only sent in production, local development runs over plain HTTP.
pub async fn security_headers_middleware(environment: Environment, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in BASE_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    if environment.is_production() {
        headers.insert(
            HeaderName::from_static("strict-transport-security"),
            HeaderValue::from_static(HSTS),
        );
    }

    response
}

/// Apply security headers to a router
pub fn apply_security_headers<S>(router: Router<S>, environment: Environment) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(move |req, next| {
        security_headers_middleware(environment.clone(), req, next)
    }))
}
