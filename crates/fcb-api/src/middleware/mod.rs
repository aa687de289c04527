//! Tower/axum middleware applied to every route.

pub mod cors;
pub mod request_id;
pub mod security_headers;

pub use cors::create_cors_layer;
pub use request_id::request_id_middleware;
pub use security_headers::apply_security_headers;
