//! Staking metric refresh and query services.

pub mod metrics;
pub mod query;
pub mod refresher;
pub mod registry;
pub mod store;
