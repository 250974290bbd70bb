//! Expiring read-through cache for the API list endpoint.
//!
//! [`Cache`] is deliberately small: `get` and `insert`. The read-through
//! behaviour lives in [`get_or_compute`], so a [`NoopCache`] can stand in
//! anywhere a [`TtlCache`] is used.
//!
//! Entries may be stale for up to the TTL; a create or send inside that
//! window is not reflected in cached pages. Two concurrent misses for the
//! same key may both compute, and the later insert wins.

use std::future::Future;
use std::time::Duration;

/// Default lifetime of a cached list page.
pub const DEFAULT_LIST_TTL: Duration = Duration::from_secs(60);

/// Key-value cache keyed by string.
pub trait Cache<V>: Send + Sync {
    /// Return a live entry for `key`, if any.
    fn get(&self, key: &str) -> Option<V>;

    /// Store `value` under `key`, replacing any previous entry.
    fn insert(&self, key: String, value: V);
}

/// Return the cached value for `key`, or run `compute` and cache its result.
///
/// Errors from `compute` are returned as-is and nothing is cached.
pub async fn get_or_compute<V, E, F, Fut>(
    cache: &dyn Cache<V>,
    key: &str,
    compute: F,
) -> Result<V, E>
where
    V: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    if let Some(hit) = cache.get(key) {
        tracing::debug!(cache_key = key, "Cache hit");
        return Ok(hit);
    }

    tracing::debug!(cache_key = key, "Cache miss");
    let value = compute().await?;
    cache.insert(key.to_string(), value.clone());
    Ok(value)
}

/// Cache key for one page of the API notification list.
pub fn list_cache_key(page: i64, limit: i64) -> String {
    format!("notifications_page_{page}_limit_{limit}")
}

/// Upper bound on stored pages before eviction kicks in.
const MAX_ENTRIES: u64 = 10_000;

/// In-memory cache whose entries expire a fixed time after insertion.
pub struct TtlCache<V> {
    inner: moka::sync::Cache<String, V>,
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ttl: Duration) -> Self {
        let inner = moka::sync::Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(ttl)
            .build();
        Self { inner }
    }
}

impl<V> Cache<V> for TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key)
    }

    fn insert(&self, key: String, value: V) {
        self.inner.insert(key, value);
    }
}

/// A cache that never stores anything; every lookup computes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl<V> Cache<V> for NoopCache {
    fn get(&self, _key: &str) -> Option<V> {
        None
    }

    fn insert(&self, _key: String, _value: V) {}
}
