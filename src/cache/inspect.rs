//! Operational view of the cache: list entries, clear everything.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::facade::{CachedPayload, DataCache};
use super::store::{CacheStats, EntrySnapshot};

#[derive(Debug, Serialize)]
pub struct CacheInspection {
    pub entries: Vec<EntrySnapshot<CachedPayload>>,
    pub stats: CacheStats,
}

#[derive(Debug, Serialize)]
pub struct CacheCleared {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Every entry with its expiry flag. Read-only: nothing is evicted.
pub fn inspect(cache: &DataCache) -> CacheInspection {
    CacheInspection {
        entries: cache.store().entries(),
        stats: cache.store().stats(),
    }
}

pub fn clear(cache: &DataCache) -> CacheCleared {
    let removed = cache.clear();
    info!("Cache cleared ({} entries)", removed);
    CacheCleared {
        message: format!("Cache cleared, {removed} entries removed"),
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StandingsReport;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn inspection_lists_entries_with_data() {
        let cache = DataCache::default();
        let _: Arc<StandingsReport> = cache
            .get_cached_data("shl-standings-24100519", Duration::from_secs(60), || async {
                Ok(Arc::new(StandingsReport {
                    data_columns: vec![],
                    stats: vec![],
                }))
            })
            .await
            .unwrap();

        let view = inspect(&cache);
        assert_eq!(view.stats.size, 1);
        assert_eq!(view.entries[0].key, "shl-standings-24100519");
        assert_eq!(view.entries[0].ttl, 60_000);
        assert!(!view.entries[0].is_expired);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["entries"][0]["isExpired"], false);
        assert!(json["entries"][0]["data"]["stats"].is_array());
        assert_eq!(json["stats"]["keys"][0], "shl-standings-24100519");
    }

    #[tokio::test]
    async fn clear_empties_cache() {
        let cache = DataCache::default();
        let _: Arc<Vec<crate::model::GameInfo>> = cache
            .get_or_fetch("chl-games-24100519", || async { Ok(Arc::new(Vec::new())) })
            .await
            .unwrap();

        let cleared = clear(&cache);
        assert_eq!(cleared.message, "Cache cleared, 1 entries removed");
        assert!(cache.store().is_empty());
    }
}
