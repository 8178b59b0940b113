//! Time-bucketed TTL cache in front of every upstream fetch.

pub mod facade;
pub mod inspect;
pub mod key;
pub mod store;

pub use facade::{Cacheable, CachedPayload, DEFAULT_TTL, DataCache};
pub use key::{cache_key, cache_key_at};
pub use store::{CacheEntry, CacheStats, DEFAULT_SWEEP_INTERVAL, TtlCache};
