// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, upstream food fixtures, and a scripted FoodDataSource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutrilog_server`

use anyhow::Result;
use async_trait::async_trait;
use nutrilog_server::{
    cache::{memory::InMemoryCache, CacheConfig, CacheProvider},
    constants::usda::SERVICE_NAME,
    errors::{AppError, AppResult},
    external::{FoodDataSource, FoodRecord},
    nutrition::NutritionLookup,
};
use serde_json::json;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Upstream behaviour a [`MockFoodSource`] call replays
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Return these records; an empty list behaves like `Empty`
    Foods(Vec<FoodRecord>),
    /// 2xx with no results
    Empty,
    /// HTTP 429
    RateLimited,
    /// Non-2xx, timeout, or malformed body
    Failure,
}

impl Scripted {
    fn replay(&self, what: &str) -> AppResult<Vec<FoodRecord>> {
        match self {
            Self::Foods(foods) if !foods.is_empty() => Ok(foods.clone()),
            Self::Foods(_) | Self::Empty => Err(AppError::not_found(format!("{what} not found"))),
            Self::RateLimited => Err(AppError::external_rate_limited(SERVICE_NAME)),
            Self::Failure => Err(AppError::external_service(SERVICE_NAME, "HTTP 500")),
        }
    }
}

/// In-process upstream double that counts calls
pub struct MockFoodSource {
    search: Mutex<Scripted>,
    food: Mutex<Scripted>,
    search_calls: AtomicUsize,
    food_calls: AtomicUsize,
    last_page_size: AtomicU32,
}

impl MockFoodSource {
    /// Source whose search and detail calls both find nothing
    pub fn new() -> Self {
        Self {
            search: Mutex::new(Scripted::Empty),
            food: Mutex::new(Scripted::Empty),
            search_calls: AtomicUsize::new(0),
            food_calls: AtomicUsize::new(0),
            last_page_size: AtomicU32::new(0),
        }
    }

    /// Source whose search returns `foods`
    pub fn with_search(foods: Vec<FoodRecord>) -> Self {
        let source = Self::new();
        source.set_search(Scripted::Foods(foods));
        source
    }

    /// Source whose detail lookup returns `food`
    pub fn with_food(food: FoodRecord) -> Self {
        let source = Self::new();
        source.set_food(Scripted::Foods(vec![food]));
        source
    }

    pub fn set_search(&self, scripted: Scripted) {
        *self.search.lock().unwrap() = scripted;
    }

    pub fn set_food(&self, scripted: Scripted) {
        *self.food.lock().unwrap() = scripted;
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn food_calls(&self) -> usize {
        self.food_calls.load(Ordering::SeqCst)
    }

    pub fn last_page_size(&self) -> u32 {
        self.last_page_size.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FoodDataSource for MockFoodSource {
    async fn search_foods(&self, query: &str, page_size: u32) -> AppResult<Vec<FoodRecord>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.last_page_size.store(page_size, Ordering::SeqCst);
        let scripted = self.search.lock().unwrap().clone();
        scripted.replay(&format!("Foods matching '{query}'"))
    }

    async fn get_food(&self, food_id: &str) -> AppResult<FoodRecord> {
        self.food_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.food.lock().unwrap().clone();
        let foods = scripted.replay(&format!("Food {food_id}"))?;
        Ok(foods.into_iter().next().expect("replay returns at least one food"))
    }
}

/// Cache without the background sweep, with the given TTL
pub async fn create_test_cache(ttl_secs: u64) -> Result<InMemoryCache> {
    let config = CacheConfig {
        default_ttl: Duration::from_secs(ttl_secs),
        enable_background_cleanup: false, // Disable in tests to avoid tokio runtime conflicts
        ..CacheConfig::default()
    };
    Ok(InMemoryCache::new(config).await?)
}

/// Orchestrator over a mock source and a one-hour cache
pub async fn create_test_lookup(source: Arc<MockFoodSource>) -> Result<NutritionLookup> {
    init_test_logging();
    let cache = create_test_cache(3600).await?;
    Ok(NutritionLookup::new(source, cache))
}

/// Search result in the flat shape
pub fn flat_food(description: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodRecord {
    serde_json::from_value(json!({
        "fdcId": 1_001,
        "description": description,
        "dataType": "Survey (FNDDS)",
        "foodNutrients": [
            { "nutrientId": 1003, "nutrientName": "Protein", "unitName": "G", "value": protein },
            { "nutrientId": 1004, "nutrientName": "Total lipid (fat)", "unitName": "G", "value": fat },
            { "nutrientId": 1005, "nutrientName": "Carbohydrate, by difference", "unitName": "G", "value": carbs },
            { "nutrientId": 1062, "nutrientName": "Energy", "unitName": "kJ", "value": calories * 4.184 },
            { "nutrientId": 1008, "nutrientName": "Energy", "unitName": "KCAL", "value": calories }
        ]
    }))
    .expect("valid flat fixture")
}

/// Food detail record in the nested shape
pub fn nested_food(fdc_id: u64, description: &str, brand: Option<&str>, calories: f64) -> FoodRecord {
    serde_json::from_value(json!({
        "fdcId": fdc_id,
        "description": description,
        "brandOwner": brand,
        "foodNutrients": [
            {
                "type": "FoodNutrient",
                "nutrient": { "id": 1008, "number": "208", "name": "Energy", "unitName": "kcal" },
                "amount": calories
            },
            {
                "type": "FoodNutrient",
                "nutrient": { "id": 1003, "number": "203", "name": "Protein", "unitName": "g" },
                "amount": 12.5
            },
            {
                "type": "FoodNutrient",
                "nutrient": { "id": 1005, "number": "205", "name": "Carbohydrate, by difference", "unitName": "g" },
                "amount": 30.0
            },
            {
                "type": "FoodNutrient",
                "nutrient": { "id": 1004, "number": "204", "name": "Total lipid (fat)", "unitName": "g" },
                "amount": 8.25
            }
        ]
    }))
    .expect("valid nested fixture")
}

/// Search result carrying no nutrients at all
pub fn food_without_nutrients(description: &str) -> FoodRecord {
    serde_json::from_value(json!({
        "fdcId": 2_002,
        "description": description,
        "foodNutrients": []
    }))
    .expect("valid empty fixture")
}
