//! Tracing and logging setup.
//!
//! Development gets pretty, colored output with source locations. Production
//! gets flattened JSON lines that include the current span, so the
//! `request_id` of the request span is attached to every event.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

const DEVELOPMENT_FILTER: &str = "debug,fcb_api=debug,fcb_db=debug,tower_http=debug,sqlx=warn";
const PRODUCTION_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Initialize tracing for `env`.
///
/// `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=info,fcb_api=trace`.
pub fn init_tracing(env: &Environment) {
    let default_filter = if env.is_development() {
        DEVELOPMENT_FILTER
    } else {
        PRODUCTION_FILTER
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if env.is_development() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .pretty()
                    .with_filter(env_filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_filter(env_filter),
            )
            .init();
    }

    tracing::info!(environment = ?env, "Tracing initialized");
}
