// ABOUTME: HTTP server assembly: wires config, cache, upstream client, and routes
// ABOUTME: Applies request tracing and CORS layers and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use crate::cache::memory::InMemoryCache;
use crate::cache::CacheProvider;
use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::external::{FoodDataSource, UsdaClient};
use crate::middleware::setup_cors;
use crate::nutrition::NutritionLookup;
use crate::routes::{CalorieRoutes, HealthRoutes};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Nutrition lookup HTTP server
pub struct NutrilogServer {
    config: ServerConfig,
    lookup: Arc<NutritionLookup>,
}

impl NutrilogServer {
    /// Build the server against the real USDA client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the cache cannot be initialized
    pub async fn new(config: ServerConfig) -> AppResult<Self> {
        let source: Arc<dyn FoodDataSource> = Arc::new(UsdaClient::new(config.usda.clone())?);
        Self::with_source(config, source).await
    }

    /// Build the server against any upstream source
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be initialized
    pub async fn with_source(
        config: ServerConfig,
        source: Arc<dyn FoodDataSource>,
    ) -> AppResult<Self> {
        let cache = InMemoryCache::new(config.cache.clone()).await?;
        let lookup = Arc::new(NutritionLookup::new(source, cache));
        Ok(Self { config, lookup })
    }

    /// The shared lookup orchestrator
    #[must_use]
    pub fn lookup(&self) -> Arc<NutritionLookup> {
        Arc::clone(&self.lookup)
    }

    /// Create the router with all routes and middleware
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(CalorieRoutes::routes(self.lookup()))
            .layer(setup_cors(&self.config.http))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on the configured address until `shutdown` resolves
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(self, shutdown: impl Future<Output = ()> + Send + 'static) -> AppResult<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            AppError::internal(format!("Failed to bind {address}: {e}")).with_source(e)
        })?;

        info!("Nutrilog server listening on {address}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e))
    }
}
