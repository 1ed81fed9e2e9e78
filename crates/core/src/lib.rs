//! Chain primitives for ethgate.
//!
//! This crate provides the small set of types shared by the adapter and the
//! HTTP front door:
//! - Account addresses and their normalization from caller input
//! - Block heights and balances as 256-bit quantities
//! - Block selectors for JSON-RPC calls

pub mod address;
pub mod quantity;

// Re-export commonly used types at the crate root
pub use address::{Address, AddressError};
pub use quantity::{parse_quantity, Balance, BlockHeight, BlockTag, QuantityError};
