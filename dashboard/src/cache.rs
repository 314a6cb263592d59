use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

struct Entry<V> {
    value: Arc<V>,
    loaded_at: Instant,
}

/// Keyed result cache with a fixed time-to-live.
///
/// Expiry is purely time-based; callers invalidate explicitly through
/// [`TtlCache::invalidate`] / [`TtlCache::invalidate_all`]. Failed loads are
/// never stored.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn is_fresh(&self, entry: &Entry<V>, now: Instant) -> bool {
        now.duration_since(entry.loaded_at) < self.ttl
    }

    /// Fresh value for `key`, if any.
    pub async fn get(&self, key: &K) -> Option<Arc<V>> {
        let map = self.entries.read().await;
        map.get(key)
            .filter(|e| self.is_fresh(e, Instant::now()))
            .map(|e| e.value.clone())
    }

    /// Return the fresh value for `key`, or run `load` and store its result.
    ///
    /// Concurrent callers for a cold key wait for the first load instead of
    /// issuing their own.
    pub async fn get_or_try_load<F, Fut, E>(&self, key: K, load: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        // Fast path: read lock
        if let Some(v) = self.get(&key).await {
            return Ok(v);
        }

        // Slow path: write lock (double-check)
        let mut map = self.entries.write().await;
        let now = Instant::now();
        if let Some(e) = map.get(&key)
            && self.is_fresh(e, now)
        {
            return Ok(e.value.clone());
        }

        let value = Arc::new(load().await?);
        let now = Instant::now();
        map.retain(|_, e| now.duration_since(e.loaded_at) < self.ttl);
        map.insert(
            key,
            Entry {
                value: value.clone(),
                loaded_at: now,
            },
        );
        Ok(value)
    }

    /// Drop one entry. Returns whether it was present.
    pub async fn invalidate(&self, key: &K) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    /// Drop every entry. Returns how many were removed.
    pub async fn invalidate_all(&self) -> usize {
        let mut map = self.entries.write().await;
        let n = map.len();
        map.clear();
        n
    }
}
