use super::types::AuctionsError;
use crate::abi::{AuctionSummary, Decoded};
use crate::handlers::common::ApiEnvelope;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

/// Handler for GET /api/auctions/:id
///
/// Returns the auction stored under `id`; 404 when no such auction exists.
pub async fn get_auction(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiEnvelope<Decoded<AuctionSummary>>>, AuctionsError> {
    let auction = state
        .source
        .auction(id)
        .await?
        .ok_or(AuctionsError::NotFound(id))?;
    Ok(Json(ApiEnvelope::success(auction)))
}
