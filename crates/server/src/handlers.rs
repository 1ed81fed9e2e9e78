//! Route handlers.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use ethgate_core::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestBlockResponse {
    /// Decimal block height.
    pub latest_block: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Decimal balance in wei.
    pub balance: String,
}

/// `GET /latest-block`
pub async fn latest_block(
    State(state): State<AppState>,
) -> Result<Json<LatestBlockResponse>, ApiError> {
    let height = state.client.latest_block_number().await?;
    Ok(Json(LatestBlockResponse {
        latest_block: height.to_string(),
    }))
}

/// `GET /balance?address=<hex>`
pub async fn balance(
    State(state): State<AppState>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let raw = query
        .address
        .filter(|a| !a.is_empty())
        .ok_or(ApiError::MissingAddress)?;
    let address = Address::from_hex(&raw)?;

    let balance = state.client.balance_of(&address).await?;
    Ok(Json(BalanceResponse {
        balance: balance.to_string(),
    }))
}
