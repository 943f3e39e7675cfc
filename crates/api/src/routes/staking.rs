//! Staking pool routes.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use xstake_common::error::AppError;
use xstake_common::types::{RefreshSummary, StakingRecord};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/staking", get(list_staking))
        .route("/staking/update", post(update_staking))
        .route("/staking/address/{address}", get(get_staking_by_address))
        .route("/staking/{id_protocol}", get(list_staking_by_protocol))
}

/// GET /staking — Every stored staking record.
async fn list_staking(State(state): State<AppState>) -> Result<Json<Vec<StakingRecord>>, AppError> {
    let records = state.queries.list_all().await?;
    Ok(Json(records))
}

/// GET /staking/:idProtocol — Records for one protocol id; empty array when none match.
async fn list_staking_by_protocol(
    State(state): State<AppState>,
    Path(id_protocol): Path<String>,
) -> Result<Json<Vec<StakingRecord>>, AppError> {
    let records = state.queries.list_by_protocol_id(&id_protocol).await?;
    Ok(Json(records))
}

/// GET /staking/address/:address — The record for a staking contract address.
async fn get_staking_by_address(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<StakingRecord>, AppError> {
    let record = state.queries.get_by_staking_address(&address).await?;
    Ok(Json(record))
}

/// POST /staking/update — Resample and upsert every tracked protocol.
async fn update_staking(State(state): State<AppState>) -> Result<Json<RefreshSummary>, AppError> {
    let summary = state.refresher.refresh_all().await?;
    Ok(Json(summary))
}
