use axum::{Router, routing::get};
use fcb_api::{
    ApiConfig, ApiState,
    metrics::{init_metrics, metrics_handler},
    router::app,
    tracing::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from .env and the environment
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    init_tracing(&config.env);
    let metrics = init_metrics()?;

    let state = ApiState::connect(&config).await?;

    let app = app(state).merge(Router::new().route("/metrics", get(metrics_handler)).with_state(metrics));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
