use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use portfolio_site::adapters::http::{build_router, AppServices};
use portfolio_site::adapters::{
    CloudinaryConfig, CloudinaryImageHost, ConnectionManager, DisabledImageHost, HttpProfileFeed,
    PostgresProfileRepository,
};
use portfolio_site::config::AppConfig;
use portfolio_site::ports::ImageHost;
use portfolio_site::telemetry::init_tracing;

fn image_host(config: &AppConfig) -> Arc<dyn ImageHost> {
    let credentials = match config.image_host.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::warn!(error = %e, "Image host not configured, uploads will fail");
            return Arc::new(DisabledImageHost::new(e.to_string()));
        }
    };

    info!(credentials = %credentials.describe(), "Image host configured");
    match CloudinaryImageHost::new(CloudinaryConfig::new(&config.image_host, credentials)) {
        Ok(host) => Arc::new(host),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build image host client");
            Arc::new(DisabledImageHost::new(e.to_string()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    // The pool is opened by the first request that needs it.
    let connections = Arc::new(ConnectionManager::new(config.database.clone()));
    let repository = Arc::new(PostgresProfileRepository::new(connections.clone()));

    let api_base = config.site.api_base_url(&config.server);
    let feed = Arc::new(HttpProfileFeed::new(&api_base)?);
    info!(endpoint = %feed.endpoint(), "Page reads profile from API");

    let app = build_router(
        &config.server,
        AppServices {
            reader: repository,
            image_host: image_host(&config),
            feed,
        },
    );

    let listener = TcpListener::bind(config.server.socket_addr()?).await?;
    info!("Portfolio site listening at {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    connections.close().await;
    info!("Server stopped");
    Ok(())
}
