//! Compute-if-absent over the TTL cache.
//!
//! Failed producers are never cached. Concurrent misses for one key wait on a
//! per-key gate so a single producer call fills the slot for all of them.

use dashmap::DashMap;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::store::TtlCache;
use crate::error::Result;
use crate::metrics;
use crate::model::{GameInfo, GoalieReport, PlayerReport, StandingsReport};

/// Default lifetime of a cached resource.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Everything the service stores in the cache.
///
/// Values are shared `Arc`s: a hit hands out the same immutable snapshot to
/// every caller.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum CachedPayload {
    Games(Arc<Vec<GameInfo>>),
    Standings(Arc<StandingsReport>),
    Players(Arc<PlayerReport>),
    Goalies(Arc<GoalieReport>),
}

/// Types that can live in the [`DataCache`].
pub trait Cacheable: Clone + Send + Sync + 'static {
    fn into_payload(self) -> CachedPayload;
    fn from_payload(payload: CachedPayload) -> Option<Self>;
}

macro_rules! cacheable {
    ($ty:ty, $variant:ident) => {
        impl Cacheable for Arc<$ty> {
            fn into_payload(self) -> CachedPayload {
                CachedPayload::$variant(self)
            }

            fn from_payload(payload: CachedPayload) -> Option<Self> {
                match payload {
                    CachedPayload::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

cacheable!(Vec<GameInfo>, Games);
cacheable!(StandingsReport, Standings);
cacheable!(PlayerReport, Players);
cacheable!(GoalieReport, Goalies);

/// Cache handle injected into the service layer.
#[derive(Clone, Debug)]
pub struct DataCache {
    store: TtlCache<CachedPayload>,
    inflight: Arc<DashMap<String, Arc<Mutex<()>>>>,
    default_ttl: Duration,
}

impl DataCache {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            store: TtlCache::new(),
            inflight: Arc::new(DashMap::new()),
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Underlying store, for inspection, invalidation and sweeping.
    pub fn store(&self) -> &TtlCache<CachedPayload> {
        &self.store
    }

    /// Return the cached value for `key`, or run `producer` and cache its
    /// result for `ttl`. Errors propagate and leave the slot empty.
    pub async fn get_cached_data<T, F, Fut>(&self, key: &str, ttl: Duration, producer: F) -> Result<T>
    where
        T: Cacheable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(hit) = self.lookup::<T>(key) {
            metrics::record_cache_lookup(true);
            return Ok(hit);
        }

        let gate = InflightGate::acquire(&self.inflight, key);
        let _turn = gate.gate.lock().await;

        // Another caller may have filled the slot while we waited
        if let Some(hit) = self.lookup::<T>(key) {
            metrics::record_cache_lookup(true);
            return Ok(hit);
        }

        metrics::record_cache_lookup(false);
        debug!("Producing value for {}", key);
        let result = producer().await;

        if let Ok(value) = &result {
            self.store.set(key, value.clone().into_payload(), ttl);
            info!("Cached {} for {}s", key, ttl.as_secs());
        } else {
            debug!("Producer for {} failed, nothing cached", key);
        }

        result
    }

    /// [`get_cached_data`](Self::get_cached_data) with the default TTL.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, producer: F) -> Result<T>
    where
        T: Cacheable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.get_cached_data(key, self.default_ttl, producer).await
    }

    /// Drop every entry. Returns how many were removed.
    pub fn clear(&self) -> usize {
        self.store.clear()
    }

    fn lookup<T: Cacheable>(&self, key: &str) -> Option<T> {
        let payload = self.store.get(key)?;
        let value = T::from_payload(payload);
        if value.is_none() {
            warn!("Cache entry {} holds an unexpected payload type", key);
        }
        value
    }

}

/// One caller's handle on the per-key gate.
///
/// Dropping it, cancellation included, removes the map slot once no other
/// caller still holds the gate.
struct InflightGate<'a> {
    inflight: &'a DashMap<String, Arc<Mutex<()>>>,
    key: &'a str,
    gate: Arc<Mutex<()>>,
}

impl<'a> InflightGate<'a> {
    fn acquire(inflight: &'a DashMap<String, Arc<Mutex<()>>>, key: &'a str) -> Self {
        let gate = inflight
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        Self {
            inflight,
            key,
            gate,
        }
    }
}

impl Drop for InflightGate<'_> {
    fn drop(&mut self) {
        // The map and this handle are the only owners left
        self.inflight.remove_if(self.key, |_, current| {
            Arc::ptr_eq(current, &self.gate) && Arc::strong_count(current) <= 2
        });
    }
}

impl Default for DataCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
