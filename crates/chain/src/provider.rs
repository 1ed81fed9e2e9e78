//! The capability set the adapter needs from a node.

use crate::error::Result;
use async_trait::async_trait;
use ethgate_core::{Address, Balance, BlockHeight, BlockTag};

/// The subset of a block header the gateway reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block height.
    pub number: BlockHeight,
    /// Block hash as reported by the node, if any.
    pub hash: Option<String>,
}

impl BlockHeader {
    /// Create a header with only a height.
    pub fn at(number: impl Into<BlockHeight>) -> Self {
        Self {
            number: number.into(),
            hash: None,
        }
    }
}

/// A source of chain data.
///
/// Implemented by [`crate::RpcProvider`] for live nodes and by substitutes in
/// tests. Implementations must tolerate concurrent calls through a shared
/// reference.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Fetch the header of the block selected by `tag`.
    async fn fetch_header(&self, tag: BlockTag) -> Result<BlockHeader>;

    /// Fetch the balance of `address` at the block selected by `tag`.
    async fn fetch_balance(&self, address: &Address, tag: BlockTag) -> Result<Balance>;
}
