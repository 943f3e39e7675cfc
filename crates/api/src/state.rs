//! Shared application state for the Axum API server.

use std::sync::Arc;

use xstake_common::config::AppConfig;
use xstake_engine::query::StakingQueryService;
use xstake_engine::refresher::MetricRefresher;
use xstake_engine::store::StakingStore;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub queries: StakingQueryService,
    pub refresher: Arc<MetricRefresher>,
}

impl AppState {
    /// Wire the services over `store` using ranges and chain from `config`.
    pub fn new(store: Arc<dyn StakingStore>, config: &AppConfig) -> Self {
        Self::from_parts(store.clone(), MetricRefresher::from_config(store, config))
    }

    pub fn from_parts(store: Arc<dyn StakingStore>, refresher: MetricRefresher) -> Self {
        Self {
            queries: StakingQueryService::new(store),
            refresher: Arc::new(refresher),
        }
    }
}
