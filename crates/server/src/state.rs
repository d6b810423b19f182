use crate::source::AuctionSource;
use config::AuctionConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AuctionConfig,
    pub source: Arc<dyn AuctionSource>,
}

impl AppState {
    pub fn new(config: AuctionConfig, source: Arc<dyn AuctionSource>) -> Self {
        Self { config, source }
    }
}
