//! Endpoint tests for the auction API, run against the mock source.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use config::AuctionConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use server::{app, source::MockAuctionSource, state::AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = AuctionConfig::default();
    let state = AppState::new(config, Arc::new(MockAuctionSource::new()));
    app::create_app(state)
}

async fn get(path: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_list_all_auctions() {
    let (status, body) = get("/api/auctions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let auctions = body["data"].as_array().unwrap();
    assert_eq!(auctions.len(), 5);
    assert_eq!(auctions[0]["name"], "Rare NFT Collection Auction");
    assert_eq!(auctions[0]["startPrice"], "5000000000000000000");
}

#[tokio::test]
async fn test_get_auction_by_id() {
    let (status, body) = get("/api/auctions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 2);
    assert_eq!(body["data"]["name"], "Governance Token Sale");
    assert_eq!(body["data"]["status"], "Ended");
}

#[tokio::test]
async fn test_nonexistent_id_is_404() {
    let (status, body) = get("/api/auctions/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Auction with ID 999 not found");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_auction_details_pinned_to_first_sample() {
    let (status, body) = get("/api/auction-details").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Rare NFT Collection Auction");
    assert_eq!(
        body["data"]["owner"],
        "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
    );
    assert_eq!(body["data"]["totalTokens"], "10000000000000000000");
}

#[tokio::test]
async fn test_health_reports_configured_endpoints_verbatim() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["rpcUrl"], "https://westend-asset-hub-eth-rpc.polkadot.io");
    assert_eq!(
        body["contractAddress"],
        "0x258ED2965B955cdAFf151F1c38a181Ec85623942"
    );
}

#[tokio::test]
async fn test_unmatched_route_is_404() {
    let (status, body) = get("/api/bids").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn test_root_lists_routes() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 4);
    assert!(routes.iter().any(|r| r["path"] == "/api/auction-details"));
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/auctions/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
