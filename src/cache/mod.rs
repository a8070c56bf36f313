// ABOUTME: Response cache abstraction for upstream nutrition lookups
// ABOUTME: Namespaced, case-normalized cache keys and a pluggable TTL provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

/// In-memory cache implementation
pub mod memory;

use crate::constants::cache::{
    DEFAULT_CLEANUP_INTERVAL_SECS, DEFAULT_TTL_SECS, NAMESPACE_CALORIES, NAMESPACE_FOOD_ID,
    NAMESPACE_NUTRITION, NAMESPACE_SEARCH,
};
use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Cache provider trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust,no_run
/// use nutrilog_server::cache::{CacheConfig, CacheKey, CacheProvider};
/// use nutrilog_server::cache::memory::InMemoryCache;
/// # async fn example() -> Result<(), nutrilog_server::errors::AppError> {
///
/// let config = CacheConfig {
///     enable_background_cleanup: false, // Disable for example
///     ..Default::default()
/// };
/// let cache = InMemoryCache::new(config).await?;
///
/// let key = CacheKey::search("Apple");
/// cache.set(&key, &vec!["apple, raw".to_owned()]).await?;
///
/// let cached: Option<Vec<String>> = cache.get(&key).await?;
/// assert!(cached.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync + Clone {
    /// Create new cache instance with configuration
    ///
    /// # Errors
    ///
    /// Returns an error if cache initialization fails
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// TTL applied by [`CacheProvider::set`]
    fn default_ttl(&self) -> Duration;

    /// Store value under the store-wide default TTL, replacing any existing entry
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    async fn set<T: Serialize + Send + Sync>(&self, key: &CacheKey, value: &T) -> AppResult<()>;

    /// Store value with an explicit TTL, replacing any existing entry and its expiry
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    async fn set_with_ttl<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Retrieve value from cache; expired entries behave as a miss
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> AppResult<Option<T>>;

    /// Remove single cache entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate(&self, key: &CacheKey) -> AppResult<()>;

    /// Check if an unexpired entry exists for key
    ///
    /// # Errors
    ///
    /// Returns an error if existence check fails
    async fn exists(&self, key: &CacheKey) -> AppResult<bool>;

    /// Get remaining TTL for key
    ///
    /// # Errors
    ///
    /// Returns an error if TTL check fails
    async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>>;

    /// Number of stored entries, including expired ones not yet reclaimed
    async fn len(&self) -> usize;

    /// Whether the store holds no entries
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Clear all cache entries (for testing/admin)
    ///
    /// # Errors
    ///
    /// Returns an error if clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Store-wide TTL used by `set`
    pub default_ttl: Duration,
    /// Cleanup interval for expired entries
    pub cleanup_interval: Duration,
    /// Enable background cleanup task (should be false in tests to avoid runtime conflicts)
    pub enable_background_cleanup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            // Default to enabled - production code should use background cleanup
            // Tests can explicitly disable by setting to false
            enable_background_cleanup: true,
        }
    }
}

/// Fingerprint of a cacheable lookup
///
/// Each lookup kind has its own namespace so identical text used by two
/// operations never shares an entry. Text components are trimmed and
/// lowercased at construction; servings are part of the key, so a different
/// serving count is a different entry rather than a recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Calorie lookup by dish name
    Calories {
        /// Normalized dish name
        dish_name: String,
        /// Serving count rendered with `f64` `Display`
        servings: String,
    },
    /// Extended nutrition lookup by dish name
    Nutrition {
        /// Normalized dish name
        dish_name: String,
        /// Serving count rendered with `f64` `Display`
        servings: String,
    },
    /// Free-text search; servings do not apply
    Search {
        /// Normalized query
        query: String,
    },
    /// Nutrition lookup by upstream identifier
    FoodById {
        /// Normalized food identifier
        food_id: String,
        /// Serving count rendered with `f64` `Display`
        servings: String,
    },
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl CacheKey {
    /// Key for a calorie lookup
    #[must_use]
    pub fn calories(dish_name: &str, servings: f64) -> Self {
        Self::Calories {
            dish_name: normalize(dish_name),
            servings: servings.to_string(),
        }
    }

    /// Key for an extended nutrition lookup
    #[must_use]
    pub fn nutrition(dish_name: &str, servings: f64) -> Self {
        Self::Nutrition {
            dish_name: normalize(dish_name),
            servings: servings.to_string(),
        }
    }

    /// Key for a free-text search
    #[must_use]
    pub fn search(query: &str) -> Self {
        Self::Search {
            query: normalize(query),
        }
    }

    /// Key for a lookup by upstream identifier
    #[must_use]
    pub fn food_by_id(food_id: &str, servings: f64) -> Self {
        Self::FoodById {
            food_id: normalize(food_id),
            servings: servings.to_string(),
        }
    }

    /// Namespace prefix of this key
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        match self {
            Self::Calories { .. } => NAMESPACE_CALORIES,
            Self::Nutrition { .. } => NAMESPACE_NUTRITION,
            Self::Search { .. } => NAMESPACE_SEARCH,
            Self::FoodById { .. } => NAMESPACE_FOOD_ID,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let namespace = self.namespace();
        match self {
            Self::Calories {
                dish_name,
                servings,
            }
            | Self::Nutrition {
                dish_name,
                servings,
            } => write!(f, "{namespace}:{dish_name}_{servings}"),
            Self::Search { query } => write!(f, "{namespace}:{query}"),
            Self::FoodById { food_id, servings } => {
                write!(f, "{namespace}:{food_id}_{servings}")
            }
        }
    }
}
