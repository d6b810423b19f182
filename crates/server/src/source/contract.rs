//! Contract-backed auction source: one `eth_call` per request, decoded
//! through the ABI pipeline.

use super::{AuctionSource, SourceError};
use crate::abi::{
    AuctionSummary, ContractMethod, Decoded, DetailsOutcome, decode_auction, decode_auction_details,
    decode_auction_list,
};
use crate::chain::ContractClient;
use async_trait::async_trait;

pub struct ContractAuctionSource {
    client: ContractClient,
}

impl ContractAuctionSource {
    pub fn new(client: ContractClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuctionSource for ContractAuctionSource {
    async fn list_auctions(&self) -> Result<Decoded<Vec<AuctionSummary>>, SourceError> {
        let raw = self
            .client
            .call_method(ContractMethod::GetAllAuctions, None)
            .await?;
        Ok(decode_auction_list(&raw))
    }

    async fn auction(&self, id: u64) -> Result<Option<Decoded<AuctionSummary>>, SourceError> {
        let raw = self
            .client
            .call_method(ContractMethod::GetAuction, Some(id))
            .await?;
        let decoded = decode_auction(&raw).map(|decoded| match decoded {
            Decoded::Value(mut summary) => {
                // The tuple carries no id; stamp the one that was asked for.
                summary.id = Some(id);
                Decoded::Value(summary)
            }
            raw_marker => raw_marker,
        });
        Ok(decoded)
    }

    async fn auction_details(&self, id: u64) -> Result<DetailsOutcome, SourceError> {
        let raw = self
            .client
            .call_method(ContractMethod::GetAuctionDetails, Some(id))
            .await?;
        Ok(decode_auction_details(&raw))
    }
}
