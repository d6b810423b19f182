//! Contract method selectors and call data encoding.

use sha3::{Digest, Keccak256};

/// The fixed set of read methods exposed by the auction contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractMethod {
    GetAllAuctions,
    GetAuction,
    GetAuctionDetails,
}

impl ContractMethod {
    /// Resolve a method by its bare name; `None` for anything outside the
    /// supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "getAllAuctions" => Some(Self::GetAllAuctions),
            "getAuction" => Some(Self::GetAuction),
            "getAuctionDetails" => Some(Self::GetAuctionDetails),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetAllAuctions => "getAllAuctions",
            Self::GetAuction => "getAuction",
            Self::GetAuctionDetails => "getAuctionDetails",
        }
    }

    /// The textual signature the selector is derived from.
    pub fn signature(&self) -> &'static str {
        match self {
            Self::GetAllAuctions => "getAllAuctions()",
            Self::GetAuction => "getAuction(uint256)",
            Self::GetAuctionDetails => "getAuctionDetails(uint256)",
        }
    }

    fn takes_id(&self) -> bool {
        matches!(self, Self::GetAuction | Self::GetAuctionDetails)
    }

    /// First 4 bytes of the keccak-256 hash of the textual signature.
    pub fn selector(&self) -> [u8; 4] {
        let digest = Keccak256::digest(self.signature().as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&digest[..4]);
        selector
    }

    /// Hex call data for `eth_call`: the selector, followed by the
    /// big-endian zero-left-padded 32-byte encoding of the id when the
    /// method takes one and an id was supplied.
    pub fn encode_call(&self, id: Option<u64>) -> String {
        let mut data = format!("0x{}", hex::encode(self.selector()));
        if self.takes_id() {
            if let Some(id) = id {
                data.push_str(&format!("{id:064x}"));
            }
        }
        data
    }
}
