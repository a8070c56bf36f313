// ABOUTME: Nutrition lookup core: nutrient extraction, validation, and orchestration
// ABOUTME: Turns upstream food records into cached, serving-scaled responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

/// Upstream payload shape classification and nutrient matching
pub mod extractor;
/// Cache-through lookup operations
pub mod lookup;
/// Request parameter validation
pub mod validation;

pub use extractor::{extract_nutrients, NutrientPayload};
pub use lookup::NutritionLookup;
