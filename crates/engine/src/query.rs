//! Read-only queries over stored staking records.

use std::sync::Arc;

use xstake_common::error::AppError;
use xstake_common::types::StakingRecord;

use crate::store::StakingStore;

/// Service layer for staking record lookups.
#[derive(Clone)]
pub struct StakingQueryService {
    store: Arc<dyn StakingStore>,
}

impl StakingQueryService {
    pub fn new(store: Arc<dyn StakingStore>) -> Self {
        Self { store }
    }

    /// Every stored record.
    pub async fn list_all(&self) -> Result<Vec<StakingRecord>, AppError> {
        self.store.list_all().await
    }

    /// Records carrying `protocol_id`. No match is an empty list, not an error.
    pub async fn list_by_protocol_id(
        &self,
        protocol_id: &str,
    ) -> Result<Vec<StakingRecord>, AppError> {
        self.store.list_by_protocol_id(protocol_id).await
    }

    /// The record for a staking contract address.
    pub async fn get_by_staking_address(
        &self,
        staking_address: &str,
    ) -> Result<StakingRecord, AppError> {
        self.store
            .find_by_staking_address(staking_address)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No staking record for {}", staking_address))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresher::MetricRefresher;
    use crate::registry::USDX_MONEY_STAKING_ADDRESS;
    use crate::store::InMemoryStakingStore;

    async fn seeded() -> StakingQueryService {
        let store = Arc::new(InMemoryStakingStore::new());
        MetricRefresher::with_defaults(store.clone())
            .refresh_all()
            .await
            .unwrap();
        StakingQueryService::new(store)
    }

    #[tokio::test]
    async fn test_list_all_after_refresh() {
        let service = seeded().await;
        assert_eq!(service.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_by_protocol_id() {
        let service = seeded().await;

        let matching = service.list_by_protocol_id("Compound_1").await.unwrap();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].project_name, "Compound");

        assert!(service.list_by_protocol_id("Compound_0").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_staking_address() {
        let service = seeded().await;

        let record = service
            .get_by_staking_address(USDX_MONEY_STAKING_ADDRESS)
            .await
            .unwrap();
        assert_eq!(record.protocol_id, "USDXMoney_2");

        let missing = service.get_by_staking_address("erd1unknown").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
