//! In-memory cache for station name lookups.
//!
//! National-rail pricing resolves every window endpoint to a name, so a
//! journey of `n` legs asks for the same few codes O(n²) times. Names
//! change rarely, so they are cached. Fares are never cached here.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::StationCode;
use crate::lookup::{LookupError, StationNameResolver};

/// Configuration for the name cache.
#[derive(Debug, Clone)]
pub struct NameCacheConfig {
    /// TTL for cached names.
    pub ttl: Duration,

    /// Maximum number of cached names.
    pub max_capacity: u64,
}

impl Default for NameCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Name resolver with caching.
///
/// Wraps any `StationNameResolver` and caches successful lookups.
/// Failures are not cached.
pub struct CachedNameResolver<R> {
    inner: R,
    names: MokaCache<StationCode, String>,
}

impl<R: StationNameResolver> CachedNameResolver<R> {
    /// Create a new cached resolver.
    pub fn new(inner: R, config: &NameCacheConfig) -> Self {
        let names = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, names }
    }

    /// Access the underlying resolver.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Invalidate all cached names.
    pub fn invalidate_all(&self) {
        self.names.invalidate_all();
    }
}

impl<R: StationNameResolver + Sync> StationNameResolver for CachedNameResolver<R> {
    async fn common_name(&self, code: &StationCode) -> Result<String, LookupError> {
        if let Some(name) = self.names.get(code).await {
            return Ok(name);
        }

        let name = self.inner.common_name(code).await?;
        self.names.insert(code.clone(), name.clone()).await;

        Ok(name)
    }
}
