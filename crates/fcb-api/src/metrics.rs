//! Prometheus metrics for HTTP traffic and database queries.

use std::{sync::LazyLock, time::Instant};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use regex::Regex;

const DURATION_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

static NUMERIC_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\d+(/|$)").expect("numeric segment pattern is valid"));

/// Install the Prometheus recorder.
///
/// Only one recorder can exist per process, call this once from `main`.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            DURATION_BUCKETS,
        )?
        .set_buckets_for_metric(Matcher::Full("db_query_duration_seconds".to_string()), DURATION_BUCKETS)?
        .install_recorder()?;

    Ok(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let in_flight = gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone());
    in_flight.increment(1.0);
    let response = next.run(req).await;
    in_flight.decrement(1.0);

    let status = response.status().as_u16().to_string();
    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}

/// Collapse numeric ids so `/decks/7` and `/decks/8` share one series.
fn normalize_path(path: &str) -> String {
    // Replace twice, adjacent ids share the separating slash
    let once = NUMERIC_SEGMENT.replace_all(path, "/:id$1");
    NUMERIC_SEGMENT.replace_all(&once, "/:id$1").into_owned()
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record one repository call under `query_name`
pub fn record_db_query(query_name: &str, duration_secs: f64, success: bool) {
    let status = if success { "success" } else { "error" };

    counter!(
        "db_queries_total",
        "query" => query_name.to_string(),
        "status" => status
    )
    .increment(1);

    histogram!(
        "db_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}
