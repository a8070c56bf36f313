// ABOUTME: In-memory TTL cache with expire-on-read and optional background sweeping
// ABOUTME: Unbounded by design; entries are small and live at most one TTL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use super::{CacheConfig, CacheKey, CacheProvider};
use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio::time::Instant;

/// In-memory cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    /// `None` when the TTL reaches past the representable clock range
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    // An entry is live up to and including its expiry instant
    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() > expires_at)
    }

    fn remaining_ttl(&self) -> Option<Duration> {
        self.expires_at.map_or(Some(Duration::MAX), |expires_at| {
            expires_at.checked_duration_since(Instant::now())
        })
    }
}

type Store = Arc<RwLock<HashMap<String, CacheEntry>>>;

/// In-memory TTL cache
///
/// Values are stored serialized so a hit hands back exactly what was stored.
/// There is no entry limit: expired entries are dropped when read and, if
/// enabled, by a periodic sweep. Uses `tokio::time::Instant` so tests can
/// drive expiry with a paused clock.
#[derive(Clone)]
pub struct InMemoryCache {
    store: Store,
    default_ttl: Duration,
    shutdown_tx: Option<Arc<mpsc::Sender<()>>>,
}

impl InMemoryCache {
    /// Create new in-memory cache with optional background cleanup task
    fn new_with_config(config: &CacheConfig) -> Self {
        let store: Store = Arc::new(RwLock::new(HashMap::new()));

        let shutdown_tx = if config.enable_background_cleanup {
            let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
            let store_clone = store.clone();
            let cleanup_interval = config.cleanup_interval;

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(cleanup_interval);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            Self::cleanup_expired(&store_clone).await;
                        }
                        _ = shutdown_rx.recv() => {
                            tracing::debug!("Cache cleanup task received shutdown signal");
                            break;
                        }
                    }
                }
            });

            Some(Arc::new(shutdown_tx))
        } else {
            None
        };

        Self {
            store,
            default_ttl: config.default_ttl,
            shutdown_tx,
        }
    }

    /// Remove all expired entries from cache
    async fn cleanup_expired(store: &Store) {
        let mut store_guard = store.write().await;
        let before = store_guard.len();
        store_guard.retain(|_, entry| !entry.is_expired());
        let removed = before - store_guard.len();
        drop(store_guard);

        if removed > 0 {
            tracing::debug!(removed, "Cleaned up expired cache entries");
        }
    }
}

#[async_trait::async_trait]
impl CacheProvider for InMemoryCache {
    async fn new(config: CacheConfig) -> AppResult<Self> {
        Ok(Self::new_with_config(&config))
    }

    fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &CacheKey, value: &T) -> AppResult<()> {
        self.set_with_ttl(key, value, self.default_ttl).await
    }

    async fn set_with_ttl<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()> {
        let serialized = serde_json::to_vec(value)?;
        let entry = CacheEntry::new(serialized, ttl);

        // Overwrite resets the expiry along with the value
        self.store.write().await.insert(key.to_string(), entry);

        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> AppResult<Option<T>> {
        let cache_key = key.to_string();
        let mut store = self.store.write().await;

        let Some(entry) = store.get(&cache_key) else {
            return Ok(None);
        };

        if entry.is_expired() {
            // Reclaim the slot now rather than waiting for the sweep
            store.remove(&cache_key);
            drop(store);
            return Ok(None);
        }

        let value: T = serde_json::from_slice(&entry.data)?;
        drop(store);
        Ok(Some(value))
    }

    async fn invalidate(&self, key: &CacheKey) -> AppResult<()> {
        self.store.write().await.remove(&key.to_string());
        Ok(())
    }

    async fn exists(&self, key: &CacheKey) -> AppResult<bool> {
        let cache_key = key.to_string();
        let mut store = self.store.write().await;

        let expired = match store.get(&cache_key) {
            Some(entry) => entry.is_expired(),
            None => return Ok(false),
        };
        if expired {
            store.remove(&cache_key);
        }
        drop(store);

        Ok(!expired)
    }

    async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>> {
        let store = self.store.read().await;

        Ok(store
            .get(&key.to_string())
            .filter(|entry| !entry.is_expired())
            .and_then(CacheEntry::remaining_ttl))
    }

    async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.store.write().await.clear();
        Ok(())
    }
}

impl Drop for InMemoryCache {
    fn drop(&mut self) {
        // Only the last clone holds the sole Arc to the sender; earlier clones must not stop the sweep
        if let Some(tx) = &self.shutdown_tx {
            if Arc::strong_count(tx) == 1 {
                if let Err(e) = tx.try_send(()) {
                    tracing::debug!(error = ?e, "Cache shutdown signal send failed (channel likely closed)");
                }
            }
        }
    }
}
