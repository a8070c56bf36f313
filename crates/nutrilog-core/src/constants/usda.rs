// ABOUTME: USDA FoodData Central endpoint defaults, page sizes, and nutrient codes
// ABOUTME: Also holds the placeholder strings substituted for missing upstream fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

/// Display name of the upstream used in error messages
pub const SERVICE_NAME: &str = "USDA API";

/// Attribution string placed on every nutrition response
pub const SOURCE_ATTRIBUTION: &str = "USDA FoodData Central";

/// Default base URL of the `FoodData` Central v1 API
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Default whole-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Largest configurable request or connect timeout in seconds
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Candidates requested when resolving a dish name to its best match
pub const NAME_LOOKUP_PAGE_SIZE: u32 = 5;

/// Candidates returned by free-text search
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// Largest page size the search endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 200;

/// Brand shown when upstream has no brand owner
pub const DEFAULT_BRAND: &str = "Generic";

/// Ingredients shown when upstream has none
pub const DEFAULT_INGREDIENTS: &str = "Not available";

/// Serving size shown when upstream has none
pub const DEFAULT_SERVING_SIZE: &str = "Not specified";

/// Serving unit assumed when upstream has none
pub const DEFAULT_SERVING_SIZE_UNIT: &str = "g";

/// Legacy nutrient numbers used by the detail endpoint
pub mod nutrient_numbers {
    /// Energy (kcal)
    pub const ENERGY_KCAL: u32 = 208;
    /// Protein
    pub const PROTEIN: u32 = 203;
    /// Total lipid (fat)
    pub const FAT: u32 = 204;
    /// Carbohydrate, by difference
    pub const CARBOHYDRATE: u32 = 205;
}

/// Literal nutrient names, matched case-sensitively
pub mod nutrient_names {
    /// Energy
    pub const ENERGY: &str = "Energy";
    /// Protein
    pub const PROTEIN: &str = "Protein";
    /// Carbohydrate
    pub const CARBOHYDRATE: &str = "Carbohydrate, by difference";
    /// Fat
    pub const FAT: &str = "Total lipid (fat)";
    /// Energy unit spelling in search results
    pub const KCAL_UPPER: &str = "KCAL";
    /// Energy unit spelling in food detail records
    pub const KCAL_LOWER: &str = "kcal";
}
