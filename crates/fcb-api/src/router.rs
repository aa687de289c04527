use axum::{Json, Router, http::StatusCode, middleware, routing::get};
use serde_json::{Value, json};
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    deck::Decks,
    deck_group::DeckGroups,
    flashcard,
    metrics::track_metrics,
    middleware::{apply_security_headers, create_cors_layer, request_id_middleware},
    resource,
    state::ApiState,
};

/// All API routes, without middleware
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(resource::routes::<DeckGroups>())
        .merge(resource::routes::<Decks>())
        .merge(flashcard::routes::routes())
        .fallback(handler_404)
}

/// The complete application: routes, middleware and state.
pub fn app(state: ApiState) -> Router {
    with_middleware(router(), &state).with_state(state)
}

/// Wrap `router` in the middleware stack configured by `state`
fn with_middleware<S>(router: Router<S>, state: &ApiState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let router = router
        .layer(TimeoutLayer::new(state.request_timeout))
        .layer(create_cors_layer(&state.allowed_origins))
        .layer(trace_layer)
        .layer(middleware::from_fn(track_metrics))
        .layer(middleware::from_fn(request_id_middleware));

    apply_security_headers(router, state.environment.clone())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "The requested resource was not found" })),
    )
}
