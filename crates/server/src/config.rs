//! Command-line and environment configuration.

use clap::Parser;
use ethgate_chain::RpcConfig;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

#[derive(Parser, Clone)]
#[command(name = "ethgate")]
#[command(about = "HTTP gateway for Ethereum block height and balance queries", long_about = None)]
pub struct Config {
    /// Upstream JSON-RPC endpoint (may embed a provider API key)
    #[arg(long, env = "ETHGATE_RPC_URL", hide_env_values = true)]
    pub rpc_url: String,

    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0", env = "ETHGATE_HOST")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "ETHGATE_PORT")]
    pub port: u16,

    /// Transport timeout for each upstream request, in seconds
    #[arg(long, default_value = "30", env = "ETHGATE_RPC_TIMEOUT_SECS")]
    pub rpc_timeout_secs: u64,
}

impl Config {
    /// Upstream settings for the chain adapter.
    pub fn rpc_config(&self) -> RpcConfig {
        RpcConfig::new(self.rpc_url.clone())
            .with_timeout(Duration::from_secs(self.rpc_timeout_secs))
    }

    /// Socket the front door binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// The endpoint URL is a secret; keep it out of debug output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("rpc_url", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("rpc_timeout_secs", &self.rpc_timeout_secs)
            .finish()
    }
}
