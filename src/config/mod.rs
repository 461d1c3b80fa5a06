//! Probe configuration: the fixed proxy endpoint and the target URLs.

use url::Url;

use crate::core::probe::types::ProbeError;

/// Default proxy host baked in at build time.
pub const DEFAULT_PROXY_HOST: &str = "115.190.229.8";

/// Default proxy port.
pub const DEFAULT_PROXY_PORT: u16 = 8888;

/// Origin echo endpoint; returns the egress IP as JSON.
pub const ORIGIN_ECHO_URL: &str = "http://httpbin.org/ip";

/// Well-known public page for the plain forwarding check.
pub const PLAIN_PAGE_URL: &str = "http://www.baidu.com";

/// HTTPS endpoint; forces the proxy through a CONNECT tunnel.
pub const HTTPS_TUNNEL_URL: &str = "https://httpbin.org/headers";

/// Per-check timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Proxy endpoint under test, fixed at process start.
///
/// Immutable for the lifetime of the run; every outbound request is routed
/// through the URL this renders.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProxyEndpoint {
    pub host: String,
    pub port: u16,
}

impl Default for ProxyEndpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_PROXY_HOST.to_string(),
            port: DEFAULT_PROXY_PORT,
        }
    }
}

impl ProxyEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Render the proxy URL reused for every outbound request.
    ///
    /// The raw `http://{host}:{port}` form is validated with the `url` crate
    /// but returned as-is, keeping the compact form for display.
    pub fn proxy_url(&self) -> Result<String, ProbeError> {
        let raw = format!("http://{}:{}", self.host, self.port);
        Url::parse(&raw)?;
        Ok(raw)
    }
}
