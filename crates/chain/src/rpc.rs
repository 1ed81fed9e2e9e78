//! JSON-RPC 2.0 provider over HTTP(S).

use crate::error::{ConnectionError, RemoteCallError, Result};
use crate::provider::{BlockHeader, ChainProvider};
use alloy_primitives::U256;
use async_trait::async_trait;
use ethgate_core::{parse_quantity, Address, Balance, BlockTag};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Default per-request timeout enforced by the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upstream endpoint settings.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Endpoint URL, possibly carrying a provider API key.
    pub url: String,
    /// Transport timeout for each request.
    pub timeout: Duration,
}

impl RpcConfig {
    /// Settings for `url` with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Render an endpoint for logs with credentials, path and query hidden.
///
/// Hosted node providers put the API key in the path, so only the scheme,
/// host and port are kept.
pub fn redact_url(url: &Url) -> String {
    let mut out = format!("{}://", url.scheme());
    if let Some(host) = url.host_str() {
        out.push_str(host);
    }
    if let Some(port) = url.port() {
        out.push_str(&format!(":{}", port));
    }
    let has_path = !matches!(url.path(), "" | "/");
    if has_path || url.query().is_some() {
        out.push_str("/***");
    }
    out
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Wire form of the header fields we read.
#[derive(Deserialize)]
struct RawHeader {
    number: String,
    #[serde(default)]
    hash: Option<String>,
}

/// Connection to a remote node speaking Ethereum JSON-RPC.
///
/// A single HTTP client is shared by all callers; request ids come from an
/// atomic counter so concurrent calls need no locking.
pub struct RpcProvider {
    http: reqwest::Client,
    url: Url,
    chain_id: U256,
    next_id: AtomicU64,
}

impl RpcProvider {
    /// Dial the endpoint and confirm it answers `eth_chainId`.
    pub async fn connect(config: &RpcConfig) -> std::result::Result<Self, ConnectionError> {
        let url =
            Url::parse(&config.url).map_err(|e| ConnectionError::InvalidUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConnectionError::UnsupportedScheme(url.scheme().to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ConnectionError::Client)?;

        let mut provider = Self {
            http,
            url,
            chain_id: U256::ZERO,
            next_id: AtomicU64::new(1),
        };

        let raw: String = provider
            .call("eth_chainId", json!([]))
            .await
            .map_err(ConnectionError::Handshake)?;
        provider.chain_id = parse_quantity(&raw).map_err(|e| {
            ConnectionError::Handshake(RemoteCallError::Decode(e.to_string()))
        })?;

        info!(
            endpoint = %redact_url(&provider.url),
            chain_id = %provider.chain_id,
            "Connected to upstream node"
        );
        Ok(provider)
    }

    /// Chain id reported during the handshake.
    pub fn chain_id(&self) -> U256 {
        self.chain_id
    }

    /// Endpoint with secrets hidden, for display.
    pub fn endpoint(&self) -> String {
        redact_url(&self.url)
    }

    /// Issue one JSON-RPC call and decode its `result`.
    async fn call<T: DeserializeOwned>(&self, method: &'static str, params: Value) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, "Sending JSON-RPC request");

        let result = self.send(method, params, id).await;
        if let Err(e) = &result {
            warn!(method, id, error = %e, "JSON-RPC call failed");
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Value,
        id: u64,
    ) -> Result<T> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };

        let response = self
            .http
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(RemoteCallError::transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteCallError::Status(status.as_u16()));
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| RemoteCallError::Decode(e.without_url().to_string()))?;

        if let Some(error) = body.error {
            return Err(RemoteCallError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        match body.result {
            None | Some(Value::Null) => Err(RemoteCallError::MissingResult { method }),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| RemoteCallError::Decode(e.to_string()))
            }
        }
    }
}

fn decode_quantity(raw: &str) -> Result<U256> {
    parse_quantity(raw).map_err(|e| RemoteCallError::Decode(e.to_string()))
}

#[async_trait]
impl ChainProvider for RpcProvider {
    async fn fetch_header(&self, tag: BlockTag) -> Result<BlockHeader> {
        let raw: RawHeader = self
            .call("eth_getBlockByNumber", json!([tag.as_param(), false]))
            .await?;
        Ok(BlockHeader {
            number: decode_quantity(&raw.number)?,
            hash: raw.hash,
        })
    }

    async fn fetch_balance(&self, address: &Address, tag: BlockTag) -> Result<Balance> {
        let raw: String = self
            .call("eth_getBalance", json!([address.to_hex(), tag.as_param()]))
            .await?;
        decode_quantity(&raw)
    }
}
