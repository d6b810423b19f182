use super::types::AuctionsError;
use crate::abi::{AuctionSummary, Decoded};
use crate::handlers::common::ApiEnvelope;
use crate::state::AppState;
use axum::{Json, extract::State};

/// Handler for GET /api/auctions
///
/// Returns every auction the configured source knows about. A payload the
/// schema cannot decode is surfaced raw with its failure reason rather
/// than failing the request.
pub async fn get_auctions(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Decoded<Vec<AuctionSummary>>>>, AuctionsError> {
    let auctions = state.source.list_auctions().await?;
    Ok(Json(ApiEnvelope::success(auctions)))
}
