//! The two queries the gateway exposes.

use crate::error::Result;
use crate::provider::ChainProvider;
use ethgate_core::{Address, Balance, BlockHeight, BlockTag};
use std::sync::Arc;

/// Shared handle to a chain provider.
///
/// Cloning is cheap; every clone issues calls over the same provider. No
/// results are cached and failed calls are not retried.
#[derive(Clone)]
pub struct ChainClient {
    provider: Arc<dyn ChainProvider>,
}

impl ChainClient {
    /// Wrap a provider.
    pub fn new<P: ChainProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Wrap an already shared provider.
    pub fn from_shared(provider: Arc<dyn ChainProvider>) -> Self {
        Self { provider }
    }

    /// Height of the current chain head.
    pub async fn latest_block_number(&self) -> Result<BlockHeight> {
        let header = self.provider.fetch_header(BlockTag::Latest).await?;
        Ok(header.number)
    }

    /// Balance of `address` at the chain head.
    pub async fn balance_of(&self, address: &Address) -> Result<Balance> {
        self.provider.fetch_balance(address, BlockTag::Latest).await
    }
}
