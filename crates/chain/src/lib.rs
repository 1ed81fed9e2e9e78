//! Chain client adapter for ethgate.
//!
//! This crate turns a remote Ethereum node into two plain numeric queries:
//! - **Provider**: the capability set a node must offer (`fetch_header`, `fetch_balance`)
//! - **Client**: `latest_block_number` and `balance_of`, built on any provider
//! - **RPC**: a JSON-RPC 2.0 provider over HTTP(S)
//!
//! # Example
//!
//! ```rust,no_run
//! use ethgate_chain::{ChainClient, RpcConfig, RpcProvider};
//! use ethgate_core::Address;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = RpcProvider::connect(&RpcConfig::new("http://localhost:8545")).await?;
//! let client = ChainClient::new(provider);
//!
//! let head = client.latest_block_number().await?;
//! let balance = client.balance_of(&Address::from_hex("0x0")?).await?;
//! println!("head {head}, balance {balance}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod provider;
pub mod rpc;

// Re-export commonly used types
pub use client::ChainClient;
pub use error::{ConnectionError, RemoteCallError, Result};
pub use provider::{BlockHeader, ChainProvider};
pub use rpc::{redact_url, RpcConfig, RpcProvider};
