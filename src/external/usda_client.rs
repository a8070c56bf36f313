// ABOUTME: USDA FoodData Central API client for food search and detail retrieval
// ABOUTME: Translates transport, status, and body failures into typed AppErrors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! USDA `FoodData` Central API Client
//!
//! Thin transport boundary over two read endpoints:
//! - `GET /foods/search?query=..&pageSize=..&api_key=..`
//! - `GET /food/{fdcId}?api_key=..`
//!
//! The client performs no caching and no retries. Every request carries a
//! timeout; a timed-out request surfaces as an external service error.
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>
//!
//! # Example
//! ```rust,no_run
//! use nutrilog_server::external::{FoodDataSource, UsdaClient, UsdaClientConfig};
//!
//! # async fn example() -> Result<(), nutrilog_server::errors::AppError> {
//! let client = UsdaClient::new(UsdaClientConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..UsdaClientConfig::default()
//! })?;
//!
//! let foods = client.search_foods("apple", 5).await?;
//! println!("best match: {:?}", foods[0].description);
//! # Ok(())
//! # }
//! ```

use super::FoodDataSource;
use crate::constants::usda::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, MAX_PAGE_SIZE,
    SERVICE_NAME,
};
use crate::errors::{AppError, AppResult};
use reqwest::{Client, ClientBuilder, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// USDA API client configuration
#[derive(Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for USDA API (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for UsdaClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsdaClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// One upstream food record, as returned by either endpoint
///
/// Only the fields the lookup core reads are modeled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    /// `FoodData` Central ID
    pub fdc_id: Option<u64>,
    /// Food description
    pub description: Option<String>,
    /// Brand owner (branded foods only)
    pub brand_owner: Option<String>,
    /// Ingredient statement (branded foods only)
    pub ingredients: Option<String>,
    /// Serving size amount
    pub serving_size: Option<f64>,
    /// Serving size unit
    pub serving_size_unit: Option<String>,
    /// Nutrient entries, in either the flat or nested shape
    pub food_nutrients: Option<Vec<FoodNutrientEntry>>,
}

impl FoodRecord {
    /// Nutrient entries, empty when upstream sent none
    #[must_use]
    pub fn nutrients(&self) -> &[FoodNutrientEntry] {
        self.food_nutrients.as_deref().unwrap_or_default()
    }
}

/// Raw nutrient entry covering both observed upstream shapes
///
/// Search results use the flat shape (`nutrientName`, `unitName`, `value`).
/// Food detail records use the nested shape (`nutrient { name, unitName }`,
/// `amount`) and may carry a legacy `nutrientNumber` code instead of a name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrientEntry {
    /// Flat shape: nutrient name
    pub nutrient_name: Option<String>,
    /// Flat shape: unit name
    pub unit_name: Option<String>,
    /// Flat shape: amount per serving basis
    pub value: Option<f64>,
    /// Nested shape: nutrient descriptor
    pub nutrient: Option<NutrientInfo>,
    /// Legacy nutrient number (208 = energy kcal, ...)
    pub nutrient_number: Option<NutrientNumber>,
    /// Nested shape: amount per serving basis
    pub amount: Option<f64>,
}

/// Nested nutrient descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientInfo {
    /// Nutrient name
    pub name: Option<String>,
    /// Unit name
    pub unit_name: Option<String>,
}

/// Legacy nutrient number: upstream sends it as an integer or a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientNumber {
    /// Integer form
    Code(u32),
    /// String form, e.g. `"208"`
    Text(String),
}

impl NutrientNumber {
    /// Numeric value, if the string form parses
    #[must_use]
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Code(code) => Some(*code),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// USDA API search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    // Pagination fields are part of the USDA contract but not needed here
    foods: Option<Vec<FoodRecord>>,
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: Client,
}

impl UsdaClient {
    /// Create a new USDA API client with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the HTTP client cannot be built
    pub fn new(config: UsdaClientConfig) -> AppResult<Self> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| {
                AppError::config_invalid(format!("Failed to build USDA HTTP client: {e}"))
                    .with_source(e)
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Base URL this client sends requests to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Send a request and decode its JSON body, mapping every failure to an `AppError`
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = request
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "request timed out".to_owned()
                } else {
                    format!("request failed: {e}")
                };
                warn!(error = %e, "USDA request failed");
                AppError::external_service(SERVICE_NAME, message).with_source(e)
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("USDA API rate limit hit");
            return Err(AppError::external_rate_limited(SERVICE_NAME));
        }
        if !status.is_success() {
            warn!(%status, "USDA API returned error status");
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}"),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "USDA API returned malformed body");
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
                .with_source(e)
        })
    }
}

#[async_trait::async_trait]
impl FoodDataSource for UsdaClient {
    async fn search_foods(&self, query: &str, page_size: u32) -> AppResult<Vec<FoodRecord>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(AppError::invalid_input(format!(
                "Page size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }

        debug!(query, page_size, "Searching USDA foods");
        let request = self.http_client.get(self.endpoint("foods/search")).query(&[
            ("query", query),
            ("pageSize", page_size.to_string().as_str()),
        ]);
        let response: SearchResponse = self.fetch(request).await?;

        match response.foods {
            Some(foods) if !foods.is_empty() => Ok(foods),
            _ => Err(AppError::not_found(format!(
                "No foods found matching '{query}'"
            ))),
        }
    }

    async fn get_food(&self, food_id: &str) -> AppResult<FoodRecord> {
        if food_id.trim().is_empty() {
            return Err(AppError::invalid_input("Food ID cannot be empty"));
        }

        debug!(food_id, "Fetching USDA food details");
        let path = format!("food/{}", urlencoding::encode(food_id.trim()));
        let request = self.http_client.get(self.endpoint(&path));

        // A literal `null` body means upstream has no such record
        let record: Option<FoodRecord> = self.fetch(request).await?;
        record.ok_or_else(|| AppError::not_found(format!("Food {food_id} not found")))
    }
}
