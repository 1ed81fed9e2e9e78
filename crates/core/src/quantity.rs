//! 256-bit quantities and block selectors as they appear on the JSON-RPC wire.

use alloy_primitives::U256;
use thiserror::Error;

/// Height of a block. Displays as a decimal string.
pub type BlockHeight = U256;

/// Account balance in the chain's smallest native unit (wei).
pub type Balance = U256;

/// Errors produced while decoding a hex quantity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("quantity is missing the 0x prefix: {0:?}")]
    MissingPrefix(String),

    #[error("quantity has no digits")]
    Empty,

    #[error("invalid quantity {value:?}: {reason}")]
    Invalid { value: String, reason: String },
}

/// Decode a JSON-RPC `QUANTITY` such as `0x3039`.
pub fn parse_quantity(s: &str) -> Result<U256, QuantityError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| QuantityError::MissingPrefix(s.to_string()))?;

    if digits.is_empty() {
        return Err(QuantityError::Empty);
    }

    U256::from_str_radix(digits, 16).map_err(|e| QuantityError::Invalid {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

/// Block selector passed to the node.
///
/// The gateway only ever reads the chain head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// The chain head.
    Latest,
}

impl BlockTag {
    /// Render the selector as a JSON-RPC parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
        }
    }
}
