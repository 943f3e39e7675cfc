//! xStake HTTP API: staking pool listings and the refresh trigger.
//!
//! Endpoints:
//! - GET  /staking                   — all staking records
//! - GET  /staking/{idProtocol}      — records for a protocol id
//! - GET  /staking/address/{address} — record for a staking contract
//! - POST /staking/update            — refresh every tracked protocol
//! - GET  /health

pub mod routes;
pub mod state;
