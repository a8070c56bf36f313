// ABOUTME: Nutrient record and externally-shaped nutrition response models
// ABOUTME: Serving scaling lives here so totals are always per-serving times servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use serde::{Deserialize, Serialize};

/// Canonical per-serving nutrient values extracted from one upstream food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientRecord {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrate in grams
    pub carbs: f64,
    /// Total fat in grams
    pub fat: f64,
}

impl NutrientRecord {
    /// Whether the record carries no usable energy value
    #[must_use]
    pub fn lacks_calories(&self) -> bool {
        self.calories == 0.0
    }

    /// Total calories for the given number of servings
    #[must_use]
    pub fn total_calories(&self, servings: f64) -> f64 {
        self.calories * servings
    }
}

/// Per-serving and total macronutrient values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macronutrients {
    /// Protein per serving (g)
    pub protein_per_serving: f64,
    /// Protein across all servings (g)
    pub total_protein: f64,
    /// Carbohydrate per serving (g)
    pub carbs_per_serving: f64,
    /// Carbohydrate across all servings (g)
    pub total_carbs: f64,
    /// Fat per serving (g)
    pub fat_per_serving: f64,
    /// Fat across all servings (g)
    pub total_fat: f64,
}

impl Macronutrients {
    /// Scale a nutrient record by a serving count
    #[must_use]
    pub fn scaled(record: &NutrientRecord, servings: f64) -> Self {
        Self {
            protein_per_serving: record.protein,
            total_protein: record.protein * servings,
            carbs_per_serving: record.carbs,
            total_carbs: record.carbs * servings,
            fat_per_serving: record.fat,
            total_fat: record.fat * servings,
        }
    }

    /// Whether every total is finite (JSON cannot carry infinities)
    #[must_use]
    pub fn totals_are_finite(&self) -> bool {
        [self.total_protein, self.total_carbs, self.total_fat]
            .iter()
            .all(|total| total.is_finite())
    }
}

/// Nutrition for a dish resolved by name (calorie and extended lookups)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishNutrition {
    /// Dish name as requested
    pub dish_name: String,
    /// Number of servings
    pub servings: f64,
    /// Calories in one serving
    pub calories_per_serving: f64,
    /// Calories across all servings
    pub total_calories: f64,
    /// Macronutrient breakdown
    pub macronutrients: Macronutrients,
    /// Data source attribution
    pub source: String,
}

impl DishNutrition {
    /// Build a scaled response for a named dish
    #[must_use]
    pub fn new(
        dish_name: impl Into<String>,
        servings: f64,
        record: &NutrientRecord,
        source: impl Into<String>,
    ) -> Self {
        Self {
            dish_name: dish_name.into(),
            servings,
            calories_per_serving: record.calories,
            total_calories: record.total_calories(servings),
            macronutrients: Macronutrients::scaled(record, servings),
            source: source.into(),
        }
    }

    /// Whether calorie and macronutrient totals are all finite
    #[must_use]
    pub fn totals_are_finite(&self) -> bool {
        self.total_calories.is_finite() && self.macronutrients.totals_are_finite()
    }
}

/// Nutrition for one upstream food fetched by identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodNutrition {
    /// Upstream food description
    pub food_name: String,
    /// Brand owner, or the generic placeholder
    pub brand: String,
    /// Number of servings
    pub servings: f64,
    /// Calories in one serving
    pub calories_per_serving: f64,
    /// Calories across all servings
    pub total_calories: f64,
    /// Macronutrient breakdown
    pub macronutrients: Macronutrients,
    /// Data source attribution
    pub source: String,
}

impl FoodNutrition {
    /// Build a scaled response for an identified food
    #[must_use]
    pub fn new(
        food_name: impl Into<String>,
        brand: impl Into<String>,
        servings: f64,
        record: &NutrientRecord,
        source: impl Into<String>,
    ) -> Self {
        Self {
            food_name: food_name.into(),
            brand: brand.into(),
            servings,
            calories_per_serving: record.calories,
            total_calories: record.total_calories(servings),
            macronutrients: Macronutrients::scaled(record, servings),
            source: source.into(),
        }
    }

    /// Whether calorie and macronutrient totals are all finite
    #[must_use]
    pub fn totals_are_finite(&self) -> bool {
        self.total_calories.is_finite() && self.macronutrients.totals_are_finite()
    }
}

/// Serving size: upstream amount, or a placeholder when absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServingSize {
    /// Numeric amount reported by upstream
    Amount(f64),
    /// Placeholder text such as "Not specified"
    Unspecified(String),
}

/// One lightly-shaped free-text search candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    /// Upstream food identifier
    pub id: Option<u64>,
    /// Food description
    pub description: String,
    /// Brand owner, or "Generic"
    pub brand_owner: String,
    /// Ingredient list, or "Not available"
    pub ingredients: String,
    /// Serving size, or "Not specified"
    pub serving_size: ServingSize,
    /// Serving size unit, or "g"
    pub serving_size_unit: String,
}

/// Free-text search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSearchResults {
    /// Candidates in upstream ranking order
    pub results: Vec<SearchResultItem>,
}
