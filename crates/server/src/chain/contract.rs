// Copyright (C) 2026 Auction Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read calls against the auction contract.

use crate::abi::{ContractMethod, RawResult};
use crate::chain::rpc::{HttpTransport, RpcError, RpcTransport};
use config::ChainConfig;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Issues `eth_call` requests for the fixed auction method set.
///
/// The transport and contract address are owned explicitly; there is no
/// lazily-created global client. One inbound request maps to at most one
/// outbound call, with no retries.
pub struct ContractClient {
    transport: Arc<dyn RpcTransport>,
    contract_address: String,
    call_timeout: Duration,
}

impl ContractClient {
    pub fn new(
        transport: Arc<dyn RpcTransport>,
        contract_address: impl Into<String>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            transport,
            contract_address: contract_address.into(),
            call_timeout,
        }
    }

    pub fn from_config(chain: &ChainConfig) -> Result<Self, url::ParseError> {
        let url = Url::parse(&chain.rpc_url)?;
        Ok(Self::new(
            Arc::new(HttpTransport::new(url)),
            chain.contract_address.clone(),
            Duration::from_secs(chain.call_timeout_secs),
        ))
    }

    /// Call a contract method by name. An unknown name fails with
    /// [`RpcError::UnsupportedMethod`] before anything touches the network.
    pub async fn call(&self, method: &str, id: Option<u64>) -> Result<RawResult, RpcError> {
        let method = ContractMethod::from_name(method)
            .ok_or_else(|| RpcError::UnsupportedMethod(method.to_string()))?;
        self.call_method(method, id).await
    }

    /// Call a known contract method, bounded by the configured timeout.
    ///
    /// On expiry the request future is dropped, which aborts the in-flight
    /// HTTP request; nothing keeps running behind the timeout.
    pub async fn call_method(
        &self,
        method: ContractMethod,
        id: Option<u64>,
    ) -> Result<RawResult, RpcError> {
        let data = method.encode_call(id);
        let params = json!([
            { "to": self.contract_address, "data": data },
            "latest",
        ]);

        tracing::debug!(method = method.name(), ?id, "issuing eth_call");
        let result = tokio::time::timeout(
            self.call_timeout,
            self.transport.request("eth_call", params),
        )
        .await
        .map_err(|_| RpcError::Timeout)??;

        let raw = result.as_str().ok_or_else(|| {
            RpcError::InvalidResponse("eth_call result is not a string".to_string())
        })?;
        Ok(RawResult::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport double that records calls and replays a fixed response.
    struct RecordingTransport {
        calls: AtomicUsize,
        response: Value,
    }

    impl RecordingTransport {
        fn returning(response: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RpcTransport for RecordingTransport {
        async fn request(&self, _method: &str, _params: Value) -> Result<Value, RpcError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    /// Transport double that never completes.
    struct StalledTransport;

    #[async_trait]
    impl RpcTransport for StalledTransport {
        async fn request(&self, _method: &str, _params: Value) -> Result<Value, RpcError> {
            std::future::pending().await
        }
    }

    fn client(transport: Arc<dyn RpcTransport>) -> ContractClient {
        ContractClient::new(
            transport,
            "0x258ED2965B955cdAFf151F1c38a181Ec85623942",
            Duration::from_secs(15),
        )
    }

    #[tokio::test]
    async fn test_unknown_method_fails_before_any_network_call() {
        let transport = RecordingTransport::returning(json!("0x"));
        let client = client(transport.clone());

        let err = client.call("doSomething", None).await.unwrap_err();
        assert!(matches!(err, RpcError::UnsupportedMethod(name) if name == "doSomething"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_known_method_returns_raw_result_unmodified() {
        let transport = RecordingTransport::returning(json!("0xdeadbeef"));
        let client = client(transport.clone());

        let raw = client.call("getAuction", Some(3)).await.unwrap();
        assert_eq!(raw.as_str(), "0xdeadbeef");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_non_string_result_is_invalid() {
        let transport = RecordingTransport::returning(json!(42));
        let client = client(transport);

        let err = client.call("getAllAuctions", None).await.unwrap_err();
        assert!(matches!(err, RpcError::InvalidResponse(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_call_times_out() {
        let client = client(Arc::new(StalledTransport));
        let err = client
            .call_method(ContractMethod::GetAllAuctions, None)
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::Timeout));
    }
}
