use crate::ConfigError;
use serde::Deserialize;

/// Which auction source strategy the server runs with.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Serve the built-in sample auctions, no network access.
    Mock,
    /// Read auction state from the configured contract over JSON-RPC.
    Rpc,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Auction source strategy
    ///
    /// Env: AUCTION_CHAIN_SOURCE
    /// Valid values: mock, rpc
    /// Default: mock
    #[serde(default = "default_source")]
    pub source: SourceKind,

    /// JSON-RPC endpoint for contract calls
    ///
    /// Env: AUCTION_CHAIN_RPC_URL
    /// Valid schemes: http://, https://
    /// Default: https://westend-asset-hub-eth-rpc.polkadot.io
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Address of the auction contract
    ///
    /// Env: AUCTION_CHAIN_CONTRACT_ADDRESS
    /// Format: 0x-prefixed, 40 hex characters
    /// Default: 0x258ED2965B955cdAFf151F1c38a181Ec85623942
    #[serde(default = "default_contract_address")]
    pub contract_address: String,

    /// Upper bound on a single contract call, in seconds. When it elapses
    /// the in-flight request is cancelled and the caller sees a timeout.
    ///
    /// Env: AUCTION_CHAIN_CALL_TIMEOUT_SECS
    /// Default: 15
    #[serde(default = "default_call_timeout_secs")]
    pub call_timeout_secs: u64,
}

fn default_source() -> SourceKind {
    SourceKind::Mock
}

fn default_rpc_url() -> String {
    "https://westend-asset-hub-eth-rpc.polkadot.io".to_string()
}

fn default_contract_address() -> String {
    "0x258ED2965B955cdAFf151F1c38a181Ec85623942".to_string()
}

fn default_call_timeout_secs() -> u64 {
    15
}

impl ChainConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.rpc_url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid RPC URL '{}': {}", self.rpc_url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid RPC URL scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        let hex_part = self
            .contract_address
            .strip_prefix("0x")
            .ok_or_else(|| missing_prefix_error(&self.contract_address))?;

        if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::ValidateError(format!(
                "Invalid contract address '{}': expected 40 hex characters after 0x",
                self.contract_address
            )));
        }

        if self.call_timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "Call timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn missing_prefix_error(address: &str) -> ConfigError {
    ConfigError::ValidateError(format!(
        "Invalid contract address '{}': missing 0x prefix",
        address
    ))
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            rpc_url: default_rpc_url(),
            contract_address: default_contract_address(),
            call_timeout_secs: default_call_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_config() {
        let config = ChainConfig::default();
        assert_eq!(config.source, SourceKind::Mock);
        assert_eq!(config.rpc_url, "https://westend-asset-hub-eth-rpc.polkadot.io");
        assert_eq!(
            config.contract_address,
            "0x258ED2965B955cdAFf151F1c38a181Ec85623942"
        );
        assert_eq!(config.call_timeout_secs, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_url() {
        let config = ChainConfig {
            rpc_url: "not-a-valid-url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_ws_scheme_rejected() {
        let config = ChainConfig {
            rpc_url: "ws://localhost:9944".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_address_without_prefix() {
        let config = ChainConfig {
            contract_address: "258ED2965B955cdAFf151F1c38a181Ec85623942".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_address_wrong_length() {
        let config = ChainConfig {
            contract_address: "0x258ED2".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_address_non_hex() {
        let config = ChainConfig {
            contract_address: "0xZZ8ED2965B955cdAFf151F1c38a181Ec85623942".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = ChainConfig {
            call_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_source_kind_deserialization() {
        let json = r#"{"source":"mock"}"#;
        let config: ChainConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.source, SourceKind::Mock);

        let json = r#"{"source":"rpc"}"#;
        let config: ChainConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.source, SourceKind::Rpc);
    }
}
