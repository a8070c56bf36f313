// ABOUTME: Normalizes both upstream nutrient payload shapes into a NutrientRecord
// ABOUTME: Classifies a record's shape once, then dispatches to a shape-specific matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Nutrient extraction
//!
//! Upstream food records come in two shapes. Search results carry a flat
//! `foodNutrients[]` keyed by `nutrientName`/`unitName` with a `value`;
//! detail records nest the descriptor under `nutrient` with an `amount`, and
//! some entries identify themselves only by a legacy `nutrientNumber`.
//!
//! | Nutrient | Flat match                      | Nested match                                |
//! |----------|---------------------------------|---------------------------------------------|
//! | calories | `Energy` with unit `KCAL`       | `Energy` with unit `kcal`, or number 208    |
//! | protein  | `Protein`                       | `Protein`, or number 203                    |
//! | carbs    | `Carbohydrate, by difference`   | same name, or number 205                    |
//! | fat      | `Total lipid (fat)`             | same name, or number 204                    |
//!
//! Names are compared case-sensitively. The first matching entry wins for
//! each nutrient; unmatched nutrients are 0.

use crate::constants::usda::{
    nutrient_names, nutrient_numbers, DEFAULT_BRAND, DEFAULT_INGREDIENTS, DEFAULT_SERVING_SIZE,
    DEFAULT_SERVING_SIZE_UNIT,
};
use crate::external::{FoodNutrientEntry, FoodRecord};
use crate::models::{NutrientRecord, SearchResultItem, ServingSize};

/// Canonical nutrient an entry can match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

/// Entry from a search result (flat shape)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatNutrient<'a> {
    name: Option<&'a str>,
    unit: Option<&'a str>,
    value: f64,
}

impl FlatNutrient<'_> {
    fn matches(&self) -> Option<Nutrient> {
        match (self.name?, self.unit) {
            (nutrient_names::ENERGY, Some(nutrient_names::KCAL_UPPER)) => Some(Nutrient::Calories),
            (nutrient_names::PROTEIN, _) => Some(Nutrient::Protein),
            (nutrient_names::CARBOHYDRATE, _) => Some(Nutrient::Carbs),
            (nutrient_names::FAT, _) => Some(Nutrient::Fat),
            _ => None,
        }
    }
}

/// Entry from a food detail record (nested shape)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NestedNutrient<'a> {
    name: Option<&'a str>,
    unit: Option<&'a str>,
    number: Option<u32>,
    amount: f64,
}

impl NestedNutrient<'_> {
    fn matches(&self) -> Option<Nutrient> {
        let named = |expected: &str| self.name == Some(expected);
        let numbered = |expected: u32| self.number == Some(expected);

        if (named(nutrient_names::ENERGY) && self.unit == Some(nutrient_names::KCAL_LOWER))
            || numbered(nutrient_numbers::ENERGY_KCAL)
        {
            Some(Nutrient::Calories)
        } else if named(nutrient_names::PROTEIN) || numbered(nutrient_numbers::PROTEIN) {
            Some(Nutrient::Protein)
        } else if named(nutrient_names::CARBOHYDRATE) || numbered(nutrient_numbers::CARBOHYDRATE) {
            Some(Nutrient::Carbs)
        } else if named(nutrient_names::FAT) || numbered(nutrient_numbers::FAT) {
            Some(Nutrient::Fat)
        } else {
            None
        }
    }
}

/// A record's nutrient list, decoded into exactly one of the two shapes
#[derive(Debug, Clone, PartialEq)]
pub enum NutrientPayload<'a> {
    /// `nutrientName`/`unitName`/`value` entries
    Flat(Vec<FlatNutrient<'a>>),
    /// `nutrient{name,unitName}`/`nutrientNumber`/`amount` entries
    Nested(Vec<NestedNutrient<'a>>),
}

impl<'a> NutrientPayload<'a> {
    /// Classify a nutrient list by shape
    ///
    /// Any entry with a nested descriptor or an `amount` marks the whole list
    /// as nested; otherwise it is flat. An empty list is flat and extracts to
    /// all zeros.
    #[must_use]
    pub fn classify(entries: &'a [FoodNutrientEntry]) -> Self {
        let nested = entries
            .iter()
            .any(|entry| entry.nutrient.is_some() || entry.amount.is_some());

        if nested {
            Self::Nested(
                entries
                    .iter()
                    .map(|entry| {
                        let info = entry.nutrient.as_ref();
                        NestedNutrient {
                            name: info.and_then(|n| n.name.as_deref()),
                            unit: info.and_then(|n| n.unit_name.as_deref()),
                            number: entry.nutrient_number.as_ref().and_then(|n| n.code()),
                            amount: entry.amount.unwrap_or_default(),
                        }
                    })
                    .collect(),
            )
        } else {
            Self::Flat(
                entries
                    .iter()
                    .map(|entry| FlatNutrient {
                        name: entry.nutrient_name.as_deref(),
                        unit: entry.unit_name.as_deref(),
                        value: entry.value.unwrap_or_default(),
                    })
                    .collect(),
            )
        }
    }

    /// Whether this payload uses the nested shape
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    /// Produce the canonical record
    #[must_use]
    pub fn extract(&self) -> NutrientRecord {
        match self {
            Self::Flat(entries) => extract_matches(entries.iter().map(|e| (e.matches(), e.value))),
            Self::Nested(entries) => {
                extract_matches(entries.iter().map(|e| (e.matches(), e.amount)))
            }
        }
    }
}

fn extract_matches(matches: impl Iterator<Item = (Option<Nutrient>, f64)>) -> NutrientRecord {
    let mut calories = None;
    let mut protein = None;
    let mut carbs = None;
    let mut fat = None;

    for (nutrient, amount) in matches {
        let slot = match nutrient {
            Some(Nutrient::Calories) => &mut calories,
            Some(Nutrient::Protein) => &mut protein,
            Some(Nutrient::Carbs) => &mut carbs,
            Some(Nutrient::Fat) => &mut fat,
            None => continue,
        };
        slot.get_or_insert(amount);
    }

    NutrientRecord {
        calories: calories.unwrap_or_default(),
        protein: protein.unwrap_or_default(),
        carbs: carbs.unwrap_or_default(),
        fat: fat.unwrap_or_default(),
    }
}

/// Extract the canonical nutrient record from one upstream food
#[must_use]
pub fn extract_nutrients(food: &FoodRecord) -> NutrientRecord {
    NutrientPayload::classify(food.nutrients()).extract()
}

/// Shape one upstream food into a search candidate, filling placeholders
#[must_use]
pub fn search_result_item(food: &FoodRecord) -> SearchResultItem {
    SearchResultItem {
        id: food.fdc_id,
        description: food.description.clone().unwrap_or_default(),
        brand_owner: brand_or_generic(food),
        ingredients: non_empty(food.ingredients.as_deref())
            .unwrap_or(DEFAULT_INGREDIENTS)
            .to_owned(),
        serving_size: food
            .serving_size
            .filter(|size| *size != 0.0)
            .map_or_else(
                || ServingSize::Unspecified(DEFAULT_SERVING_SIZE.to_owned()),
                ServingSize::Amount,
            ),
        serving_size_unit: non_empty(food.serving_size_unit.as_deref())
            .unwrap_or(DEFAULT_SERVING_SIZE_UNIT)
            .to_owned(),
    }
}

/// Brand owner of a food, or the generic placeholder
#[must_use]
pub fn brand_or_generic(food: &FoodRecord) -> String {
    non_empty(food.brand_owner.as_deref())
        .unwrap_or(DEFAULT_BRAND)
        .to_owned()
}

// Upstream sends "" as often as it omits a field; both mean absent
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
