// Copyright (C) 2026 Auction Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

mod chain;
mod error;
mod http;
mod log;

pub use chain::{ChainConfig, SourceKind};
pub use error::ConfigError;
pub use http::HttpConfig;
pub use log::LogConfig;

use serde::Deserialize;

/// Top-level service configuration, assembled from `AUCTION_`-prefixed
/// environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuctionConfig {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub chain: ChainConfig,
}

impl AuctionConfig {
    /// Load configuration from the environment, reading a `.env` file first
    /// if one is present. Each section has its own variable prefix, e.g.
    /// `AUCTION_HTTP_PORT`, `AUCTION_CHAIN_RPC_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let config = Self {
            http: envy::prefixed("AUCTION_HTTP_").from_env::<HttpConfig>()?,
            log: envy::prefixed("AUCTION_LOG_").from_env::<LogConfig>()?,
            chain: envy::prefixed("AUCTION_CHAIN_").from_env::<ChainConfig>()?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.log.validate()?;
        self.chain.validate()?;
        Ok(())
    }
}
