//! Account addresses and normalization of caller-supplied hex.

use std::fmt;
use thiserror::Error;

/// A named alias for a 20-byte(u8) array, the raw form of an account address.
pub type AddressBytes = [u8; 20];

/// Maximum number of hex digits an address may carry.
const MAX_HEX_DIGITS: usize = 40;

/// Errors produced while normalizing an address.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("address has {0} hex digits, at most 40 allowed")]
    TooLong(usize),

    #[error("address is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 20-byte account address on the chain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub AddressBytes);

impl Address {
    /// The zero address (all zeros).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Convert to a lowercase hex string (with 0x prefix).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse and normalize a hex string.
    ///
    /// The `0x` prefix is optional. Short inputs are left-padded with zeros,
    /// so `0x0` names the zero address and `ab` names `0x00..ab`.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.is_empty() {
            return Err(AddressError::Empty);
        }
        if digits.len() > MAX_HEX_DIGITS {
            return Err(AddressError::TooLong(digits.len()));
        }

        // Odd-length input gets one leading nibble of padding.
        let bytes = if digits.len() % 2 == 1 {
            hex::decode(format!("0{digits}"))?
        } else {
            hex::decode(digits)?
        };

        let mut arr = [0u8; 20];
        arr[20 - bytes.len()..].copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
