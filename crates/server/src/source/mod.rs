//! Auction data sources.
//!
//! The mock and the contract-backed reader are mutually exclusive
//! strategies for the same responsibility, so they live behind one trait
//! and the configuration picks which one the server runs with.

pub mod contract;
pub mod mock;

use crate::abi::{AuctionSummary, Decoded, DetailsOutcome};
use crate::chain::{ContractClient, RpcError};
use async_trait::async_trait;
use config::{AuctionConfig, SourceKind};
use std::sync::Arc;
use thiserror::Error;

pub use contract::ContractAuctionSource;
pub use mock::MockAuctionSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

/// Read-only view over the auction marketplace.
#[async_trait]
pub trait AuctionSource: Send + Sync {
    async fn list_auctions(&self) -> Result<Decoded<Vec<AuctionSummary>>, SourceError>;

    /// `None` means no auction exists under that id.
    async fn auction(&self, id: u64) -> Result<Option<Decoded<AuctionSummary>>, SourceError>;

    async fn auction_details(&self, id: u64) -> Result<DetailsOutcome, SourceError>;
}

/// Build the source strategy selected by the configuration.
pub fn build_source(config: &AuctionConfig) -> anyhow::Result<Arc<dyn AuctionSource>> {
    match config.chain.source {
        SourceKind::Mock => Ok(Arc::new(MockAuctionSource::new())),
        SourceKind::Rpc => {
            let client = ContractClient::from_config(&config.chain)?;
            Ok(Arc::new(ContractAuctionSource::new(client)))
        }
    }
}
