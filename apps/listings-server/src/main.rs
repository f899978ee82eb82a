//! Listings server binary
//!
//! Wires the in-memory repository, flag source and REST router together
//! and serves them over HTTP.

use listings::api::rest::routes;
use listings::config::{FigmentFlagSource, ServerConfig};
use listings::domain::Service;
use listings::infra::storage::InMemoryListingRepository;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listings=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::var("LISTINGS_CONFIG").unwrap_or_else(|_| "config.yaml".into());
    let config = ServerConfig::load(&config_path)?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        request_timeout_secs = config.request_timeout_secs,
        "configuration loaded"
    );

    let repository = Arc::new(InMemoryListingRepository::new());
    let flags = Arc::new(FigmentFlagSource::new(config_path));
    let service = Arc::new(Service::new(repository, flags));

    let app = routes::router(service)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
    }
}
