mod api;
mod config;
mod dto;
mod state;

use crate::{config::ServerConfig, state::AppState};
use axum::routing::get;
use ecobici::{feed::Feed, repository::Repository};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    info!("Loading stations...");
    let now = Instant::now();
    let feed = match &config.data_path {
        Some(path) => Feed::new().from_path(path),
        None => Feed::new(),
    };
    let repository = match Repository::new().load_feed(&feed) {
        Ok(repository) => repository,
        Err(err) => {
            error!("Failed to load stations: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "Loading {} stations took {:?}",
        repository.len(),
        now.elapsed()
    );
    let state = Arc::new(AppState::new(repository, config.reference));

    let app = axum::Router::new()
        .route("/stations", get(api::nearby))
        .route("/stations/{id}", get(api::station))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
