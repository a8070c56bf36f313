// ABOUTME: Main library entry point for the Nutrilog nutrition lookup service
// ABOUTME: Cached USDA FoodData Central lookups exposed over a small JSON API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

#![deny(unsafe_code)]

//! # Nutrilog Server
//!
//! Backend for a meal-tracking client: resolves a dish name or a USDA food
//! identifier to calories and macronutrients scaled by a serving count.
//!
//! ## Architecture
//!
//! - **Cache**: in-memory TTL store keyed by a normalized request fingerprint
//! - **External**: USDA `FoodData` Central client behind the `FoodDataSource` trait
//! - **Nutrition**: nutrient extraction for both upstream payload shapes, plus
//!   the lookup orchestrator that validates, caches, and scales results
//! - **Routes**: thin axum handlers over the orchestrator
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrilog_server::config::ServerConfig;
//! use nutrilog_server::errors::AppResult;
//! use nutrilog_server::server::NutrilogServer;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let server = NutrilogServer::new(config).await?;
//!     server.run(async { let _ = tokio::signal::ctrl_c().await; }).await
//! }
//! ```

/// Response caching with TTL expiry
pub mod cache;

/// Environment configuration
pub mod config;

/// Service constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Upstream nutrition data clients
pub mod external;

/// Logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Request and response models
pub mod models;

/// Nutrient extraction and lookup orchestration
pub mod nutrition;

/// HTTP route handlers
pub mod routes;

/// Server assembly
pub mod server;
