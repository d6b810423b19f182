//! Decoding of raw `eth_call` results into auction records.
//!
//! The pipeline is deliberately split into small stages: the raw hex payload
//! is cut into fixed 32-byte fields, the fields are interpreted by position
//! against the known `getAuctionDetails` layout, and the simpler call shapes
//! are decoded against a declared tuple schema instead.

pub mod address;
pub mod decode;
pub mod fields;
pub mod selector;
pub mod tuple;

pub use address::to_checksum_address;
pub use decode::{AuctionDetails, DetailsOutcome, StringRecovery, decode_auction_details};
pub use fields::{Field, RawResult, split_fields};
pub use selector::ContractMethod;
pub use tuple::{AuctionSummary, Decoded, decode_auction, decode_auction_list};
