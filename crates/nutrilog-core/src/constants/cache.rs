// ABOUTME: Cache-related constants for TTL, cleanup intervals, and key namespaces
// ABOUTME: One fixed store-wide TTL; namespaces keep lookup kinds from colliding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

/// Store-wide default TTL for nutrition responses (1 hour)
pub const DEFAULT_TTL_SECS: u64 = 3_600;

/// Largest configurable TTL or cleanup interval (7 days)
pub const MAX_TTL_SECS: u64 = 604_800;

/// Default cleanup interval in seconds for expired entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300; // 5 minutes

/// Key namespace for calorie lookups by dish name
pub const NAMESPACE_CALORIES: &str = "calories";

/// Key namespace for extended nutrition lookups by dish name
pub const NAMESPACE_NUTRITION: &str = "nutrition";

/// Key namespace for free-text food search
pub const NAMESPACE_SEARCH: &str = "search";

/// Key namespace for nutrition lookups by upstream food identifier
pub const NAMESPACE_FOOD_ID: &str = "nutrition_id";
