//! Populates the portfolio profile.
//!
//! Uploads the images under `scripts/seed-images/` (relative to the working
//! directory) and upserts the profile keyed on its email. Safe to re-run.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use portfolio_site::adapters::{
    CloudinaryConfig, CloudinaryImageHost, ConnectionManager, PostgresProfileRepository,
};
use portfolio_site::application::{SeedProfileCommand, SeedProfileHandler};
use portfolio_site::config::AppConfig;
use portfolio_site::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Seed failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.server);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            error!(error = %e, "Seed failed: cannot read working directory");
            return ExitCode::FAILURE;
        }
    };
    info!(cwd = %cwd.display(), "Starting seed");
    info!(present = config.database.has_url(), "Env check: database URL");

    if let Err(e) = config.validate_for_seed() {
        error!(error = %e, "Seed failed");
        return ExitCode::FAILURE;
    }

    let credentials = match config.image_host.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "Seed failed");
            return ExitCode::FAILURE;
        }
    };
    info!(credentials = %credentials.describe(), "Image host configured");

    let image_host =
        match CloudinaryImageHost::new(CloudinaryConfig::new(&config.image_host, credentials)) {
            Ok(host) => Arc::new(host),
            Err(e) => {
                error!(error = %e, "Seed failed");
                return ExitCode::FAILURE;
            }
        };

    let connections = Arc::new(ConnectionManager::new(config.database.clone()));
    let repository = Arc::new(PostgresProfileRepository::new(connections.clone()));
    let handler = SeedProfileHandler::new(repository, image_host, cwd);

    let status = match handler.handle(SeedProfileCommand::site_owner()).await {
        Ok(outcome) => {
            info!(
                profile_id = %outcome.profile_id,
                kind = ?outcome.kind,
                "Seed complete. Profile upserted"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Seed failed");
            ExitCode::FAILURE
        }
    };

    connections.close().await;
    info!("Disconnected. Done.");
    status
}
