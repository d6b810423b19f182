use axum::{Router, routing::get};

use crate::{handlers::auctions, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auctions", get(auctions::get_auctions))
        .route("/api/auctions/:id", get(auctions::get_auction))
        .route("/api/auction-details", get(auctions::get_auction_details))
}
