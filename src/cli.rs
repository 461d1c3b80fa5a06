use clap::Parser;

use crate::config::{DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT, DEFAULT_TIMEOUT_MS};

#[derive(Parser, Debug)]
#[command(name = "proxyprobe")]
#[command(version = concat!("Ver:", env!("CARGO_PKG_VERSION")))]
#[command(about = "Proxy connectivity smoke test: egress IP, plain forwarding, CONNECT tunnel")]
pub struct Cli {
    /// Proxy host to test
    #[arg(long, default_value = DEFAULT_PROXY_HOST)]
    pub host: String,

    /// Proxy port to test
    #[arg(long, default_value_t = DEFAULT_PROXY_PORT)]
    pub port: u16,

    /// Per-check timeout in milliseconds
    #[arg(long = "timeout-ms", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u32,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
