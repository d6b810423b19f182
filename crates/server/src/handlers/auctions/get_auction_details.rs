use super::types::AuctionsError;
use crate::abi::DetailsOutcome;
use crate::handlers::common::ApiEnvelope;
use crate::state::AppState;
use axum::{Json, extract::State};

/// Id the details endpoint is pinned to.
const DETAILS_AUCTION_ID: u64 = 0;

/// Handler for GET /api/auction-details
///
/// Returns the decoded details of auction 0. An empty contract result is a
/// 404; an undecodable head comes back as the raw payload plus the failure
/// reason.
pub async fn get_auction_details(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<DetailsOutcome>>, AuctionsError> {
    let outcome = state.source.auction_details(DETAILS_AUCTION_ID).await?;
    if matches!(outcome, DetailsOutcome::Empty) {
        return Err(AuctionsError::NoDetails);
    }
    Ok(Json(ApiEnvelope::success(outcome)))
}
