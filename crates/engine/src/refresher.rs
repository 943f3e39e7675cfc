//! Metric refresher — synthesizes APY/TVL for each registry entry and upserts it.
//!
//! Per-entry failures are logged and reported as outcomes, never as errors,
//! so one bad write cannot abort a full refresh.

use std::sync::Arc;

use futures::future::join_all;

use xstake_common::config::{AppConfig, DEFAULT_CHAIN};
use xstake_common::error::AppError;
use xstake_common::types::{
    LOGO_URL, RefreshSummary, STAKING_CATEGORY, StakingRecord, StakingUpsert, TOKEN_NAME,
};

use crate::metrics::MetricSampler;
use crate::registry::{ProtocolDescriptor, SeedRegistry};
use crate::store::StakingStore;

/// Result of refreshing a single registry entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The record was written; carries the stored row.
    Refreshed(StakingRecord),
    /// The index did not name a registry entry; nothing was written.
    InvalidIndex(i64),
    /// The store rejected the write.
    Failed { project_name: String, error: String },
}

impl RefreshOutcome {
    pub fn is_refreshed(&self) -> bool {
        matches!(self, RefreshOutcome::Refreshed(_))
    }
}

/// Refreshes stored metrics for every protocol in a registry.
pub struct MetricRefresher {
    store: Arc<dyn StakingStore>,
    registry: SeedRegistry,
    sampler: MetricSampler,
    chain: String,
}

impl MetricRefresher {
    pub fn new(
        store: Arc<dyn StakingStore>,
        registry: SeedRegistry,
        sampler: MetricSampler,
        chain: impl Into<String>,
    ) -> Self {
        Self {
            store,
            registry,
            sampler,
            chain: chain.into(),
        }
    }

    /// Refresher over the devnet registry with ranges and chain from `config`.
    pub fn from_config(store: Arc<dyn StakingStore>, config: &AppConfig) -> Self {
        Self::new(
            store,
            SeedRegistry::devnet(),
            MetricSampler::from_config(config),
            config.chain.clone(),
        )
    }

    pub fn registry(&self) -> &SeedRegistry {
        &self.registry
    }

    pub fn sampler(&self) -> &MetricSampler {
        &self.sampler
    }

    /// Draw new metrics for the entry at `index` and upsert its record.
    pub async fn refresh_one(&self, index: i64) -> RefreshOutcome {
        let Some((position, descriptor)) = self.registry.get(index) else {
            tracing::warn!(index, "Invalid registry index, skipping refresh");
            return RefreshOutcome::InvalidIndex(index);
        };

        let metrics = self.sampler.sample();
        let upsert = self.build_upsert(position, descriptor, metrics.apy, metrics.tvl);

        match self.store.upsert(&upsert).await {
            Ok(record) => {
                tracing::info!(
                    project = %record.project_name,
                    staking_address = %record.staking_address,
                    apy = record.apy,
                    tvl = record.tvl,
                    "Updated staking data"
                );
                RefreshOutcome::Refreshed(record)
            }
            Err(e) => {
                tracing::error!(
                    index,
                    project = %descriptor.project_name,
                    error = %e,
                    "Failed to update staking data"
                );
                RefreshOutcome::Failed {
                    project_name: descriptor.project_name.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    /// Refresh every registry entry concurrently and summarize the results.
    ///
    /// All entry refreshes are started together and awaited as a group. Only
    /// the final record count can fail this call.
    pub async fn refresh_all(&self) -> Result<RefreshSummary, AppError> {
        let tasks = (0..self.registry.len()).map(|index| self.refresh_one(index as i64));
        let outcomes = join_all(tasks).await;

        let refreshed = outcomes.iter().filter(|o| o.is_refreshed()).count();
        let failed = outcomes.len() - refreshed;

        let count = self.store.count().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to count staking records after refresh");
            AppError::Refresh(e.to_string())
        })?;

        let message = if failed == 0 {
            "All staking data updated successfully".to_string()
        } else {
            format!("Staking data updated with {} failure(s)", failed)
        };

        tracing::info!(refreshed, failed, count, "Staking refresh complete");

        Ok(RefreshSummary {
            message,
            count,
            tokens: self.registry.project_names(),
            refreshed,
            failed,
        })
    }

    /// Devnet registry, default ranges, default chain.
    pub fn with_defaults(store: Arc<dyn StakingStore>) -> Self {
        Self::new(
            store,
            SeedRegistry::devnet(),
            MetricSampler::default(),
            DEFAULT_CHAIN,
        )
    }

    fn build_upsert(
        &self,
        index: usize,
        descriptor: &ProtocolDescriptor,
        apy: f64,
        tvl: f64,
    ) -> StakingUpsert {
        StakingUpsert {
            protocol_id: descriptor.protocol_id(index),
            token_address: descriptor.token_address.to_string(),
            staking_address: descriptor.staking_address.to_string(),
            token_name: TOKEN_NAME.to_string(),
            project_name: descriptor.project_name.to_string(),
            chain: self.chain.clone(),
            apy,
            is_stablecoin: false,
            categories: vec![STAKING_CATEGORY.to_string()],
            logo_url: LOGO_URL.to_string(),
            tvl,
        }
    }
}
