// ABOUTME: Nutrilog HTTP server binary
// ABOUTME: Loads configuration, initializes logging, and serves the lookup API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! # Nutrilog Server Binary
//!
//! Serves calorie and nutrition lookups backed by USDA `FoodData` Central.

use anyhow::Result;
use clap::Parser;
use nutrilog_server::{config::ServerConfig, logging, server::NutrilogServer};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nutrilog-server")]
#[command(about = "Nutrilog - calorie and nutrition lookups for meal tracking")]
pub struct Args {
    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    info!("{}", config.summary());
    display_available_endpoints(&config);

    let server = NutrilogServer::new(config).await?;
    server.run(shutdown_signal()).await?;

    info!("Nutrilog server stopped");
    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("=== Available API Endpoints ===");
    info!("  POST {base}/api/calories/get-calories");
    info!("  POST {base}/api/calories/get-nutrition");
    info!("  POST {base}/api/calories/search-foods");
    info!("  POST {base}/api/calories/get-nutrition-by-id");
    info!("  GET  {base}/health");
    info!("  GET  {base}/ready");
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
