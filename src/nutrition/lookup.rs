// ABOUTME: Lookup orchestrator for the four nutrition operations
// ABOUTME: Validate, fingerprint, serve from cache or fetch-extract-scale-store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Nutrition lookups
//!
//! Every operation follows the same template: validate the request, derive a
//! [`CacheKey`], return a cached value unchanged on hit, otherwise call the
//! upstream source, shape the result, store it, and return it. Failed lookups
//! never write the cache, so a transient upstream failure does not poison
//! later requests for the same key.
//!
//! Concurrent misses on the same key are not coalesced; both reach upstream
//! and the last write wins.

use super::extractor::{brand_or_generic, extract_nutrients, search_result_item};
use super::validation::{parse_food_id, parse_servings, require_text, SERVINGS_MESSAGE};
use crate::cache::memory::InMemoryCache;
use crate::cache::{CacheKey, CacheProvider};
use crate::constants::usda::{NAME_LOOKUP_PAGE_SIZE, SEARCH_PAGE_SIZE, SOURCE_ATTRIBUTION};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::{FoodDataSource, FoodRecord};
use crate::models::{
    DishLookupRequest, DishNutrition, FoodIdLookupRequest, FoodNutrition, FoodSearchRequest,
    FoodSearchResults, NutrientRecord,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const DISH_NOT_FOUND: &str = "Dish not found";
const FOOD_NOT_FOUND: &str = "Food not found";
const NO_SEARCH_RESULTS: &str = "No foods found matching your query";
const NO_CALORIE_DATA: &str = "Calorie information not available for this dish";
const NO_FOOD_CALORIE_DATA: &str = "Calorie information not available for this food";

/// Orchestrates validated, cache-through nutrition lookups
///
/// Both collaborators are injected: the cache is shared by every operation
/// and the upstream source is any [`FoodDataSource`].
#[derive(Clone)]
pub struct NutritionLookup {
    source: Arc<dyn FoodDataSource>,
    cache: InMemoryCache,
}

impl NutritionLookup {
    /// Create an orchestrator over an upstream source and a cache
    #[must_use]
    pub fn new(source: Arc<dyn FoodDataSource>, cache: InMemoryCache) -> Self {
        Self { source, cache }
    }

    /// The cache this orchestrator reads and fills
    #[must_use]
    pub const fn cache(&self) -> &InMemoryCache {
        &self.cache
    }

    /// Calorie lookup by dish name, using the top upstream search match
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a missing dish name or bad servings, `ResourceNotFound`
    /// when nothing matches or the match has no calorie data, otherwise the
    /// upstream error unchanged
    #[instrument(skip_all, fields(operation = "get_calories"))]
    pub async fn get_calories(&self, request: &DishLookupRequest) -> AppResult<DishNutrition> {
        let (dish_name, servings) = validate_dish(request)?;
        let key = CacheKey::calories(&dish_name, servings);

        self.cached(&key, || self.resolve_dish(&dish_name, servings))
            .await
    }

    /// Extended nutrition lookup by dish name
    ///
    /// Computed exactly like [`Self::get_calories`] but cached in its own
    /// namespace.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_calories`]
    #[instrument(skip_all, fields(operation = "get_nutrition"))]
    pub async fn get_nutrition(&self, request: &DishLookupRequest) -> AppResult<DishNutrition> {
        let (dish_name, servings) = validate_dish(request)?;
        let key = CacheKey::nutrition(&dish_name, servings);

        self.cached(&key, || self.resolve_dish(&dish_name, servings))
            .await
    }

    /// Free-text search returning up to ten shaped candidates
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a missing query, `ResourceNotFound` for no results,
    /// otherwise the upstream error unchanged
    #[instrument(skip_all, fields(operation = "search_foods"))]
    pub async fn search_foods(&self, request: &FoodSearchRequest) -> AppResult<FoodSearchResults> {
        let query = require_text(request.query.as_deref(), "Search query is required")?;
        let key = CacheKey::search(&query);

        self.cached(&key, || async {
            let foods = self
                .source
                .search_foods(&query, SEARCH_PAGE_SIZE)
                .await
                .map_err(not_found_as(NO_SEARCH_RESULTS))?;

            Ok(FoodSearchResults {
                results: foods.iter().map(search_result_item).collect(),
            })
        })
        .await
    }

    /// Nutrition lookup for one upstream food identifier
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a missing id or bad servings, `ResourceNotFound` when
    /// upstream has no such food or it has no calorie data, otherwise the
    /// upstream error unchanged
    #[instrument(skip_all, fields(operation = "get_nutrition_by_id"))]
    pub async fn get_nutrition_by_id(
        &self,
        request: &FoodIdLookupRequest,
    ) -> AppResult<FoodNutrition> {
        let food_id = parse_food_id(request.food_id.as_ref())?;
        let servings = parse_servings(request.servings.as_ref())?;
        let key = CacheKey::food_by_id(&food_id, servings);

        self.cached(&key, || async {
            let food = self
                .source
                .get_food(&food_id)
                .await
                .map_err(not_found_as(FOOD_NOT_FOUND))?;
            let nutrients = usable_nutrients(&food, NO_FOOD_CALORIE_DATA)?;

            let nutrition = FoodNutrition::new(
                food.description.clone().unwrap_or_default(),
                brand_or_generic(&food),
                servings,
                &nutrients,
                SOURCE_ATTRIBUTION,
            );
            require_finite_totals(nutrition.totals_are_finite())?;
            Ok(nutrition)
        })
        .await
    }

    async fn resolve_dish(&self, dish_name: &str, servings: f64) -> AppResult<DishNutrition> {
        let foods = self
            .source
            .search_foods(dish_name, NAME_LOOKUP_PAGE_SIZE)
            .await
            .map_err(not_found_as(DISH_NOT_FOUND))?;

        // Upstream ranking is trusted as-is; no local re-ranking
        let best_match = foods
            .first()
            .ok_or_else(|| AppError::not_found(DISH_NOT_FOUND))?;
        let nutrients = usable_nutrients(best_match, NO_CALORIE_DATA)?;

        debug!(
            dish_name,
            fdc_id = ?best_match.fdc_id,
            description = ?best_match.description,
            "Resolved dish to upstream food"
        );

        let nutrition = DishNutrition::new(dish_name, servings, &nutrients, SOURCE_ATTRIBUTION);
        require_finite_totals(nutrition.totals_are_finite())?;
        Ok(nutrition)
    }

    /// Serve `key` from cache, or run `fill` and store its successful result
    async fn cached<T, F, Fut>(&self, key: &CacheKey, fill: F) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        if let Some(hit) = self.cache.get::<T>(key).await? {
            debug!(%key, "Cache hit");
            return Ok(hit);
        }

        debug!(%key, "Cache miss, querying upstream");
        let value = fill().await?;
        self.cache.set(key, &value).await?;
        info!(%key, "Cached upstream lookup");

        Ok(value)
    }
}

fn validate_dish(request: &DishLookupRequest) -> AppResult<(String, f64)> {
    let dish_name = require_text(request.dish_name.as_deref(), "Dish name is required")?;
    let servings = parse_servings(request.servings.as_ref())?;
    Ok((dish_name, servings))
}

/// Extract nutrients, rejecting a record whose calories come out as zero
fn usable_nutrients(food: &FoodRecord, message: &'static str) -> AppResult<NutrientRecord> {
    let nutrients = extract_nutrients(food);
    if nutrients.lacks_calories() {
        debug!(fdc_id = ?food.fdc_id, "Upstream food has no calorie data");
        return Err(AppError::not_found(message));
    }
    Ok(nutrients)
}

/// Reject a serving count large enough to overflow the scaled totals
fn require_finite_totals(finite: bool) -> AppResult<()> {
    if finite {
        Ok(())
    } else {
        Err(AppError::invalid_input(SERVINGS_MESSAGE))
    }
}

/// Replace an upstream not-found message with the caller-facing one
fn not_found_as(message: &'static str) -> impl Fn(AppError) -> AppError {
    move |error| {
        if error.code == ErrorCode::ResourceNotFound {
            AppError::not_found(message)
        } else {
            error
        }
    }
}
