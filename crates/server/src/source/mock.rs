//! Static sample auctions for running the API without a chain connection.

use super::{AuctionSource, SourceError};
use crate::abi::{AuctionDetails, AuctionSummary, Decoded, DetailsOutcome};
use async_trait::async_trait;
use ethereum_types::U256;

/// Owner reported for sample auction details; the sample data itself
/// predates any real deployment.
const SAMPLE_OWNER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Serves a fixed set of sample auctions. Lookup by id; details use the
/// contract's zero-based indexing, so id 0 maps to the first sample.
pub struct MockAuctionSource {
    auctions: Vec<AuctionSummary>,
}

impl MockAuctionSource {
    pub fn new() -> Self {
        Self {
            auctions: sample_auctions(),
        }
    }
}

impl Default for MockAuctionSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuctionSource for MockAuctionSource {
    async fn list_auctions(&self) -> Result<Decoded<Vec<AuctionSummary>>, SourceError> {
        Ok(Decoded::Value(self.auctions.clone()))
    }

    async fn auction(&self, id: u64) -> Result<Option<Decoded<AuctionSummary>>, SourceError> {
        let found = self
            .auctions
            .iter()
            .find(|auction| auction.id == Some(id))
            .cloned();
        Ok(found.map(Decoded::Value))
    }

    async fn auction_details(&self, id: u64) -> Result<DetailsOutcome, SourceError> {
        let Ok(index) = usize::try_from(id) else {
            return Ok(DetailsOutcome::Empty);
        };
        match self.auctions.get(index) {
            Some(auction) => Ok(DetailsOutcome::Details(details_from_summary(auction))),
            None => Ok(DetailsOutcome::Empty),
        }
    }
}

fn details_from_summary(auction: &AuctionSummary) -> AuctionDetails {
    AuctionDetails {
        owner: SAMPLE_OWNER.to_string(),
        token_address: auction.token_address.clone(),
        start_time: auction.start_time,
        duration: auction.duration,
        end_time: auction.end_time,
        start_price: auction.start_price,
        min_price: auction.min_price,
        current_price: auction.current_price,
        tokens_sold: auction.tokens_sold,
        total_tokens: auction.tokens_total,
        is_active: auction.is_active,
        time_remaining: auction.time_remaining,
        name: auction.name.clone(),
        description: auction.description.clone(),
        status: auction.status.clone(),
        string_recovery: None,
    }
}

fn sample_auctions() -> Vec<AuctionSummary> {
    vec![
        sample(
            1,
            "Rare NFT Collection Auction",
            "A collection of rare digital art pieces from renowned artists",
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            1_650_000_000_000,
            604_800_000,
            1_650_604_800_000,
            5_000_000_000_000_000_000,
            1_000_000_000_000_000_000,
            3_500_000_000_000_000_000,
            345_600_000,
            3_000_000_000_000_000_000,
            10_000_000_000_000_000_000,
            true,
            "Active",
        ),
        sample(
            2,
            "Governance Token Sale",
            "Participate in our DAO by acquiring governance tokens",
            "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty",
            1_649_500_000_000,
            1_209_600_000,
            1_650_709_600_000,
            10_000_000_000_000_000_000,
            5_000_000_000_000_000_000,
            7_500_000_000_000_000_000,
            0,
            8_000_000_000_000_000_000,
            10_000_000_000_000_000_000,
            false,
            "Ended",
        ),
        sample(
            3,
            "Future Gaming Platform Token",
            "Early access tokens for upcoming blockchain gaming platform",
            "5FLSigC9HGRKVhB9FiEo4Y3koPsNmBmLJbpXg2mp1hXcS59Y",
            1_651_000_000_000,
            864_000_000,
            1_651_864_000_000,
            2_000_000_000_000_000_000,
            500_000_000_000_000_000,
            2_000_000_000_000_000_000,
            864_000_000,
            0,
            5_000_000_000_000_000_000,
            false,
            "NotStarted",
        ),
        sample(
            4,
            "DeFi Protocol Token Auction",
            "Tokens for a new DeFi lending and borrowing protocol",
            "5DAAnrj7VHTznn2C8LTXDs5dF28XApYuzQzLkNLFr8MhAcaB",
            1_649_800_000_000,
            432_000_000,
            1_650_232_000_000,
            3_000_000_000_000_000_000,
            1_000_000_000_000_000_000,
            2_200_000_000_000_000_000,
            172_800_000,
            6_000_000_000_000_000_000,
            15_000_000_000_000_000_000,
            true,
            "Active",
        ),
        sample(
            5,
            "Metaverse Land Auction",
            "Virtual land parcels in a new blockchain-based metaverse",
            "5HGjWAeFDfFCWPsjFQdVV2Msvz2XtMktvgocEZcCj68kUMaw",
            1_649_000_000_000,
            1_209_600_000,
            1_650_209_600_000,
            20_000_000_000_000_000_000,
            10_000_000_000_000_000_000,
            18_500_000_000_000_000_000,
            0,
            12_000_000_000_000_000_000,
            20_000_000_000_000_000_000,
            false,
            "Ended",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u64,
    name: &str,
    description: &str,
    token_address: &str,
    start_time: u64,
    duration: u64,
    end_time: u64,
    start_price: u128,
    min_price: u128,
    current_price: u128,
    time_remaining: u64,
    tokens_sold: u128,
    tokens_total: u128,
    is_active: bool,
    status: &str,
) -> AuctionSummary {
    AuctionSummary {
        id: Some(id),
        owner: None,
        name: name.to_string(),
        description: description.to_string(),
        token_address: token_address.to_string(),
        start_time,
        duration,
        end_time,
        start_price: U256::from(start_price),
        min_price: U256::from(min_price),
        current_price: U256::from(current_price),
        time_remaining,
        tokens_sold: U256::from(tokens_sold),
        tokens_total: U256::from(tokens_total),
        is_active,
        status: status.to_string(),
    }
}
