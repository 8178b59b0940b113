pub mod handlers;
pub mod middleware;
pub mod state;

use crate::config::Config;
use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Build the router around an existing state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::health_check))
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render))
        .route("/api/cache", get(handlers::cache::inspect_cache))
        .route("/api/cache/clear", post(handlers::cache::clear_cache))
        .route("/api/{league}/games", get(handlers::league::games))
        .route("/api/{league}/standings", get(handlers::league::standings))
        .route("/api/{league}/players", get(handlers::league::players))
        .route("/api/{league}/goalies", get(handlers::league::goalies))
        .route("/api/{league}/teams", get(handlers::league::teams))
        .route(
            "/api/{league}/teams/{code}/overview",
            get(handlers::insights::team_overview),
        )
        .route("/api/{league}/streaks", get(handlers::insights::streaks))
        .route(
            "/api/{league}/largest-wins",
            get(handlers::insights::largest_wins),
        )
        .route(
            "/api/{league}/scoring-extremes",
            get(handlers::insights::scoring_extremes),
        )
        .layer(axum::middleware::from_fn(middleware::track_metrics))
        .layer(axum::middleware::map_response(middleware::version_header))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the full router with fresh state and a running cache sweeper.
pub async fn build_router(config: Config) -> Router {
    let state = AppState::new(config);
    spawn_sweeper(&state);
    router(state)
}

fn spawn_sweeper(state: &AppState) -> tokio::task::JoinHandle<()> {
    state
        .cache()
        .store()
        .spawn_sweeper(state.config.sweep_interval(), state.shutdown.clone())
}

/// Start the Axum HTTP server
pub async fn start(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("0.0.0.0:{}", config.port);

    let state = AppState::new(config);
    let sweeper = spawn_sweeper(&state);

    // Warm the cache in the background; failures only get logged
    let service = state.service.clone();
    tokio::spawn(async move {
        let failures = service.warm_all().await;
        info!("Cache warm-up finished with {} failed fetches", failures);
    });

    let shutdown = state.shutdown.clone();
    let app = router(state);

    let listener = match tokio::net::TcpListener::bind(addr.as_str()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    info!("Server listening on http://{}", addr);

    let serve = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());
    if let Err(e) = serve.await {
        error!("Server error: {}", e);
        shutdown.cancel();
        return Err(e.into());
    }

    info!("Shutting down");
    shutdown.cancel();
    sweeper.await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
