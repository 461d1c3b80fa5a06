// Core types for the proxy probe
use std::time::Duration;

/// Outcome of a single connectivity check.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CheckOutcome {
    /// Endpoint answered 200 through the proxy.
    Success,
    /// Endpoint reachable but answered a non-200 status.
    HttpFailure(u16),
    /// Fault below HTTP: connection refused, timeout, DNS, TLS negotiation.
    TransportError(String),
}

impl CheckOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::Success)
    }
}

/// Result of one check, produced fresh per run.
///
/// Consumed by the report renderer immediately after the check completes;
/// instances carry no identity and no relationship to one another.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckResult {
    /// Operator-facing check label
    pub label: String,
    /// URL the check targeted through the proxy
    pub target_url: String,
    pub outcome: CheckOutcome,
    /// Wall-clock time the request took
    pub elapsed: Duration,
    /// Success detail lines for the report ("出口 IP: …", "内容长度: … bytes")
    pub notes: Vec<String>,
}

/// Setup errors raised before any check runs.
///
/// Per-check network failures are never errors; they are folded into
/// [`CheckOutcome`] and reported.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("invalid proxy URL: {0}")]
    InvalidProxyUrl(#[from] url::ParseError),
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),
}

/// Parse boolean environment variables (strict true/false only).
///
/// Only accepts "true" or "false" (case insensitive). All other values,
/// including unset, default to false.
pub fn parse_env_bool(env_var: &str) -> bool {
    std::env::var(env_var)
        .map(|v| match v.trim().to_lowercase().as_str() {
            "true" => true,
            _ => false,
        })
        .unwrap_or(false)
}
