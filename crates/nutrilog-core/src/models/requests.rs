// ABOUTME: Inbound request payloads for the four nutrition lookup operations
// ABOUTME: Fields are optional so validation can report which one is missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Calorie or extended nutrition lookup by dish name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishLookupRequest {
    /// Dish to resolve against upstream search
    pub dish_name: Option<String>,
    /// Serving count; a JSON number or numeric string
    pub servings: Option<Value>,
}

impl DishLookupRequest {
    /// Convenience constructor for numeric servings
    #[must_use]
    pub fn new(dish_name: impl Into<String>, servings: f64) -> Self {
        Self {
            dish_name: Some(dish_name.into()),
            servings: Some(Value::from(servings)),
        }
    }
}

/// Free-text food search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodSearchRequest {
    /// Search text
    pub query: Option<String>,
}

impl FoodSearchRequest {
    /// Convenience constructor
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

/// Nutrition lookup by upstream food identifier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodIdLookupRequest {
    /// Upstream identifier; a string or an integer
    #[serde(rename = "foodId")]
    pub food_id: Option<Value>,
    /// Serving count; a JSON number or numeric string
    pub servings: Option<Value>,
}

impl FoodIdLookupRequest {
    /// Convenience constructor for numeric ids and servings
    #[must_use]
    pub fn new(food_id: u64, servings: f64) -> Self {
        Self {
            food_id: Some(Value::from(food_id)),
            servings: Some(Value::from(servings)),
        }
    }
}
