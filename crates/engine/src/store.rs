//! Staking record storage.
//!
//! `StakingStore` is the seam between the refresher/query services and the
//! database. `PgStakingStore` is the production implementation; the
//! in-memory store backs unit and route tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use xstake_common::error::AppError;
use xstake_common::types::{StakingRecord, StakingUpsert};

/// Persistence operations for staking records.
#[async_trait]
pub trait StakingStore: Send + Sync {
    /// Insert the record, or overwrite `apy`, `tvl` and `updated_at` if a
    /// record with the same staking address already exists.
    async fn upsert(&self, upsert: &StakingUpsert) -> Result<StakingRecord, AppError>;

    /// Every stored record, ordered by protocol id.
    async fn list_all(&self) -> Result<Vec<StakingRecord>, AppError>;

    async fn list_by_protocol_id(&self, protocol_id: &str)
    -> Result<Vec<StakingRecord>, AppError>;

    async fn find_by_staking_address(
        &self,
        staking_address: &str,
    ) -> Result<Option<StakingRecord>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

/// PostgreSQL-backed store over the `staking_pools` table.
#[derive(Clone)]
pub struct PgStakingStore {
    pool: PgPool,
}

impl PgStakingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StakingStore for PgStakingStore {
    async fn upsert(&self, upsert: &StakingUpsert) -> Result<StakingRecord, AppError> {
        // The UNIQUE constraint on staking_address makes this atomic per key.
        let record: StakingRecord = sqlx::query_as(
            r#"
            INSERT INTO staking_pools (
                id, protocol_id, token_address, staking_address, token_name, project_name,
                chain, apy, is_stablecoin, categories, logo_url, tvl
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (staking_address) DO UPDATE
            SET tvl = EXCLUDED.tvl, apy = EXCLUDED.apy, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&upsert.protocol_id)
        .bind(&upsert.token_address)
        .bind(&upsert.staking_address)
        .bind(&upsert.token_name)
        .bind(&upsert.project_name)
        .bind(&upsert.chain)
        .bind(upsert.apy)
        .bind(upsert.is_stablecoin)
        .bind(&upsert.categories)
        .bind(&upsert.logo_url)
        .bind(upsert.tvl)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<StakingRecord>, AppError> {
        let records: Vec<StakingRecord> =
            sqlx::query_as("SELECT * FROM staking_pools ORDER BY protocol_id")
                .fetch_all(&self.pool)
                .await?;

        Ok(records)
    }

    async fn list_by_protocol_id(
        &self,
        protocol_id: &str,
    ) -> Result<Vec<StakingRecord>, AppError> {
        let records: Vec<StakingRecord> = sqlx::query_as(
            "SELECT * FROM staking_pools WHERE protocol_id = $1 ORDER BY staking_address",
        )
        .bind(protocol_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find_by_staking_address(
        &self,
        staking_address: &str,
    ) -> Result<Option<StakingRecord>, AppError> {
        let record: Option<StakingRecord> =
            sqlx::query_as("SELECT * FROM staking_pools WHERE staking_address = $1")
                .bind(staking_address)
                .fetch_optional(&self.pool)
                .await?;

        Ok(record)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staking_pools")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Store kept in process memory, keyed by staking address.
#[derive(Default)]
pub struct InMemoryStakingStore {
    records: RwLock<HashMap<String, StakingRecord>>,
}

impl InMemoryStakingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StakingStore for InMemoryStakingStore {
    async fn upsert(&self, upsert: &StakingUpsert) -> Result<StakingRecord, AppError> {
        let mut records = self.records.write().await;
        let now = Utc::now();

        let record = match records.get_mut(&upsert.staking_address) {
            Some(existing) => {
                existing.tvl = upsert.tvl;
                existing.apy = upsert.apy;
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                let record = upsert.clone().into_record(now);
                records.insert(record.staking_address.clone(), record.clone());
                record
            }
        };

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<StakingRecord>, AppError> {
        let records = self.records.read().await;
        let mut all: Vec<StakingRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| a.protocol_id.cmp(&b.protocol_id));
        Ok(all)
    }

    async fn list_by_protocol_id(
        &self,
        protocol_id: &str,
    ) -> Result<Vec<StakingRecord>, AppError> {
        let records = self.records.read().await;
        let mut matching: Vec<StakingRecord> = records
            .values()
            .filter(|r| r.protocol_id == protocol_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.staking_address.cmp(&b.staking_address));
        Ok(matching)
    }

    async fn find_by_staking_address(
        &self,
        staking_address: &str,
    ) -> Result<Option<StakingRecord>, AppError> {
        Ok(self.records.read().await.get(staking_address).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.read().await.len() as i64)
    }
}
