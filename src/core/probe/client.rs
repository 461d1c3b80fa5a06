//! HTTP client seam for probe checks.
//!
//! Provides the client abstraction the checks are written against, plus the
//! production isahc implementation that routes everything through the
//! configured proxy.

use std::time::{Duration, Instant};

use crate::core::probe::types::ProbeError;

#[cfg(feature = "network-probe")]
use isahc::config::{Configurable, RedirectPolicy};
#[cfg(feature = "network-probe")]
use isahc::{AsyncReadResponseExt, HttpClient, Request};

/// Response handed back to a check for classification.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// HTTP status code from the target endpoint
    pub status_code: u16,
    /// Full response body
    pub body: Vec<u8>,
    /// Request duration measured around the transfer
    pub duration: Duration,
}

/// HTTP client abstraction for dependency injection and testing.
///
/// Implementations must route every request through the proxy under test
/// and must not follow redirects.
#[async_trait::async_trait]
pub trait ProbeClient: Send + Sync {
    /// Execute a GET against `url` bounded by `timeout_ms`.
    ///
    /// # Returns
    /// * `Ok(ProbeResponse)` - endpoint answered; any status code
    /// * `Err(String)` - transport fault: refusal, timeout, DNS, TLS
    async fn get(&self, url: String, timeout_ms: u32) -> Result<ProbeResponse, String>;
}

/// Production probe client using isahc with an upstream proxy.
///
/// isahc performs the CONNECT handshake itself for https targets, so one
/// client covers both the plain forwarding checks and the tunnel check.
#[cfg(feature = "network-probe")]
pub struct IsahcProbeClient {
    client: HttpClient,
}

#[cfg(feature = "network-probe")]
impl IsahcProbeClient {
    pub fn new(proxy_url: &str) -> Result<Self, ProbeError> {
        let proxy_uri: isahc::http::Uri = proxy_url
            .parse()
            .map_err(|e| ProbeError::ClientSetup(format!("bad proxy URI: {}", e)))?;

        let client = HttpClient::builder()
            .proxy(Some(proxy_uri))
            .redirect_policy(RedirectPolicy::None)
            .build()
            .map_err(|e| ProbeError::ClientSetup(format!("failed to create probe client: {}", e)))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "network-probe")]
#[async_trait::async_trait]
impl ProbeClient for IsahcProbeClient {
    async fn get(&self, url: String, timeout_ms: u32) -> Result<ProbeResponse, String> {
        let start = Instant::now();

        let request = Request::get(&url)
            .timeout(Duration::from_millis(timeout_ms as u64))
            .header("User-Agent", concat!("proxyprobe/", env!("CARGO_PKG_VERSION")))
            .body(Vec::new()) // Empty body for GET request
            .map_err(|e| format!("Request creation failed: {}", e))?;

        let mut response = self
            .client
            .send_async(request)
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status_code = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))?
            .to_vec();

        Ok(ProbeResponse {
            status_code,
            body,
            duration: start.elapsed(),
        })
    }
}

/// Mock probe client used when the network-probe feature is disabled
#[cfg(not(feature = "network-probe"))]
#[derive(Default)]
pub struct MockProbeClient;

#[cfg(not(feature = "network-probe"))]
#[async_trait::async_trait]
impl ProbeClient for MockProbeClient {
    async fn get(&self, _url: String, _timeout_ms: u32) -> Result<ProbeResponse, String> {
        Ok(ProbeResponse {
            status_code: 200,
            body: br#"{"origin": "127.0.0.1"}"#.to_vec(),
            duration: Duration::from_millis(20),
        })
    }
}
