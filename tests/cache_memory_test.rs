// ABOUTME: Integration tests for the in-memory TTL cache
// ABOUTME: Covers expiry on read, per-entry TTL, overwrite semantics, and the background sweep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use anyhow::Result;
use nutrilog_server::cache::{memory::InMemoryCache, CacheConfig, CacheKey, CacheProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct TestData {
    value: String,
    calories: f64,
}

fn sample(value: &str) -> TestData {
    TestData {
        value: value.to_owned(),
        calories: 0.1 + 0.2,
    }
}

/// Helper: Create in-memory cache with custom config
async fn create_test_cache(ttl_secs: u64) -> Result<InMemoryCache> {
    let config = CacheConfig {
        default_ttl: Duration::from_secs(ttl_secs),
        enable_background_cleanup: false, // Disable in tests to avoid tokio runtime conflicts
        ..CacheConfig::default()
    };
    Ok(InMemoryCache::new(config).await?)
}

#[tokio::test]
async fn test_get_returns_exactly_what_was_stored() -> Result<()> {
    let cache = create_test_cache(60).await?;
    let key = CacheKey::calories("pizza", 2.0);
    let data = sample("pizza");

    cache.set(&key, &data).await?;
    let cached: Option<TestData> = cache.get(&key).await?;

    assert_eq!(cached, Some(data));
    Ok(())
}

#[tokio::test]
async fn test_missing_key_is_a_miss() -> Result<()> {
    let cache = create_test_cache(60).await?;

    let cached: Option<TestData> = cache.get(&CacheKey::search("nothing")).await?;

    assert!(cached.is_none());
    assert!(cache.is_empty().await);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_expired_entry_is_removed_on_read() -> Result<()> {
    let cache = create_test_cache(10).await?;
    let key = CacheKey::search("apple");
    cache.set(&key, &sample("apple")).await?;

    tokio::time::advance(Duration::from_secs(11)).await;

    let cached: Option<TestData> = cache.get(&key).await?;
    assert!(cached.is_none());
    assert_eq!(cache.len().await, 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_per_entry_ttl_overrides_default() -> Result<()> {
    let cache = create_test_cache(10).await?;
    let short = CacheKey::search("short");
    let long = CacheKey::search("long");

    cache.set(&short, &sample("short")).await?;
    cache
        .set_with_ttl(&long, &sample("long"), Duration::from_secs(100))
        .await?;

    tokio::time::advance(Duration::from_secs(50)).await;

    assert!(!cache.exists(&short).await?);
    assert!(cache.exists(&long).await?);

    let remaining = cache.ttl(&long).await?.expect("long entry still live");
    assert_eq!(remaining, Duration::from_secs(50));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_overwrite_replaces_value_and_expiry() -> Result<()> {
    let cache = create_test_cache(10).await?;
    let key = CacheKey::nutrition("oatmeal", 1.0);

    cache.set(&key, &sample("first")).await?;
    tokio::time::advance(Duration::from_secs(8)).await;
    cache.set(&key, &sample("second")).await?;
    tokio::time::advance(Duration::from_secs(8)).await;

    let cached: Option<TestData> = cache.get(&key).await?;
    assert_eq!(cached, Some(sample("second")));
    assert_eq!(cache.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_invalidate_and_clear_all() -> Result<()> {
    let cache = create_test_cache(60).await?;
    let first = CacheKey::food_by_id("171477", 1.0);
    let second = CacheKey::food_by_id("171478", 1.0);

    cache.set(&first, &sample("a")).await?;
    cache.set(&second, &sample("b")).await?;

    cache.invalidate(&first).await?;
    assert!(!cache.exists(&first).await?);
    assert!(cache.exists(&second).await?);

    cache.clear_all().await?;
    assert!(cache.is_empty().await);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_background_cleanup_sweeps_expired_entries() -> Result<()> {
    let config = CacheConfig {
        default_ttl: Duration::from_secs(1),
        cleanup_interval: Duration::from_secs(2),
        enable_background_cleanup: true,
    };
    let cache = InMemoryCache::new(config).await?;

    cache.set(&CacheKey::search("stale"), &sample("stale")).await?;
    cache
        .set_with_ttl(
            &CacheKey::search("fresh"),
            &sample("fresh"),
            Duration::from_secs(600),
        )
        .await?;

    // Paused clock auto-advances through the sweep ticks while we sleep
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(cache.len().await, 1);
    assert!(cache.exists(&CacheKey::search("fresh")).await?);
    Ok(())
}

#[tokio::test]
async fn test_clones_share_one_store() -> Result<()> {
    let cache = create_test_cache(60).await?;
    let clone = cache.clone();
    let key = CacheKey::search("shared");

    clone.set(&key, &sample("shared")).await?;
    drop(clone);

    let cached: Option<TestData> = cache.get(&key).await?;
    assert!(cached.is_some());
    Ok(())
}
