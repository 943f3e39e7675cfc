use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Liquid staking token name shared by every tracked pool.
pub const TOKEN_NAME: &str = "xEGLD";

/// Logo served for every tracked pool.
pub const LOGO_URL: &str = "https://s2.coinmarketcap.com/static/img/coins/200x200/6892.png";

/// Category tag applied to every tracked pool.
pub const STAKING_CATEGORY: &str = "Staking";

/// A persisted staking pool snapshot, one row per staking contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StakingRecord {
    pub id: Uuid,
    /// `<project_name>_<registry index>`
    pub protocol_id: String,
    pub token_address: String,
    /// Unique key of the table.
    pub staking_address: String,
    pub token_name: String,
    pub project_name: String,
    pub chain: String,
    pub apy: f64,
    pub is_stablecoin: bool,
    pub categories: Vec<String>,
    pub logo_url: String,
    pub tvl: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values written by one refresh of a registry entry.
///
/// On insert every field is used; on conflict only `apy`, `tvl` and the
/// update timestamp overwrite the stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct StakingUpsert {
    pub protocol_id: String,
    pub token_address: String,
    pub staking_address: String,
    pub token_name: String,
    pub project_name: String,
    pub chain: String,
    pub apy: f64,
    pub is_stablecoin: bool,
    pub categories: Vec<String>,
    pub logo_url: String,
    pub tvl: f64,
}

impl StakingUpsert {
    /// Materialize the row this upsert would insert into an empty table.
    pub fn into_record(self, now: DateTime<Utc>) -> StakingRecord {
        StakingRecord {
            id: Uuid::new_v4(),
            protocol_id: self.protocol_id,
            token_address: self.token_address,
            staking_address: self.staking_address,
            token_name: self.token_name,
            project_name: self.project_name,
            chain: self.chain,
            apy: self.apy,
            is_stablecoin: self.is_stablecoin,
            categories: self.categories,
            logo_url: self.logo_url,
            tvl: self.tvl,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Aggregate result of refreshing every registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshSummary {
    pub message: String,
    /// Records in the store after the refresh.
    pub count: i64,
    /// Project names that were attempted.
    pub tokens: Vec<String>,
    pub refreshed: usize,
    pub failed: usize,
}
