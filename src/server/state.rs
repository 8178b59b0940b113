use crate::{cache::DataCache, config::Config, metrics, service::LeagueService};
use metrics_exporter_prometheus::PrometheusHandle;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Shared HTTP client for connection pooling
    pub http_client: Client,
    /// League reads behind the cache
    pub service: LeagueService,
    /// Handle used to render `/metrics`
    pub metrics: PrometheusHandle,
    pub started_at: Instant,
    /// Cancels background tasks (cache sweeper) on shutdown
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: Config) -> Self {
        let http_client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("puckfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to configure HTTP client, using defaults: {}", e);
                Client::new()
            });

        let cache = DataCache::new(config.cache_ttl());
        let service = LeagueService::from_config(&config, http_client.clone(), cache);

        Self {
            config: Arc::new(config),
            http_client,
            service,
            metrics: metrics::init(),
            started_at: Instant::now(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn cache(&self) -> &DataCache {
        self.service.cache()
    }
}
