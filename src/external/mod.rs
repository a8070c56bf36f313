// ABOUTME: External API client modules (USDA FoodData Central)
// ABOUTME: Defines the FoodDataSource seam the lookup orchestrator depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! External API Clients
//!
//! Upstream access sits behind [`FoodDataSource`] so the orchestrator can be
//! exercised against an in-process double. Implementations never cache; that
//! is the orchestrator's job.

pub mod usda_client;

use crate::errors::AppResult;

// Re-export commonly used types
pub use usda_client::{
    FoodNutrientEntry, FoodRecord, NutrientInfo, NutrientNumber, UsdaClient, UsdaClientConfig,
};

/// Read-only access to an upstream nutrition database
///
/// Both calls go to the network once, with no retry. Failures map to
/// `ExternalRateLimited` (HTTP 429), `ExternalServiceError` (other non-2xx,
/// timeout, transport, malformed body), or `ResourceNotFound` (2xx with no
/// matching record).
#[async_trait::async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Search foods by text, returning at least one record in upstream ranking order
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an empty result list, or an upstream error
    async fn search_foods(&self, query: &str, page_size: u32) -> AppResult<Vec<FoodRecord>>;

    /// Fetch a single food record by its upstream identifier
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if upstream returns no record, or an upstream error
    async fn get_food(&self, food_id: &str) -> AppResult<FoodRecord>;
}
