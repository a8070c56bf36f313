// ABOUTME: Data models exchanged between the lookup core and its callers
// ABOUTME: Re-exports nutrient records, response shapes, and request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! # Data Models
//!
//! Response types serialize to the JSON shapes the meal-tracking UI consumes,
//! so field names here are part of the wire contract.

mod nutrition;
mod requests;

pub use nutrition::{
    DishNutrition, FoodNutrition, FoodSearchResults, Macronutrients, NutrientRecord,
    SearchResultItem, ServingSize,
};
pub use requests::{DishLookupRequest, FoodIdLookupRequest, FoodSearchRequest};
