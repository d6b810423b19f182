//! Outbound JSON-RPC plumbing: the transport and the contract call client.

pub mod contract;
pub mod rpc;

pub use contract::ContractClient;
pub use rpc::{HttpTransport, RpcError, RpcTransport};
