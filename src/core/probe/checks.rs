//! The three connectivity checks and their sequential orchestration.

use std::time::Instant;

use serde::Deserialize;

use crate::config::{HTTPS_TUNNEL_URL, ORIGIN_ECHO_URL, PLAIN_PAGE_URL};
use crate::core::probe::client::ProbeClient;
use crate::core::probe::debug::DebugLogger;
use crate::core::probe::types::{CheckOutcome, CheckResult};

/// JSON shape of the origin echo endpoint.
#[derive(Debug, Deserialize)]
struct OriginEcho {
    origin: String,
}

fn http_failure(label: &str, target_url: &str, status: u16, start: Instant) -> CheckResult {
    CheckResult {
        label: label.to_string(),
        target_url: target_url.to_string(),
        outcome: CheckOutcome::HttpFailure(status),
        elapsed: start.elapsed(),
        notes: Vec::new(),
    }
}

fn transport_error(label: &str, target_url: &str, message: String, start: Instant) -> CheckResult {
    CheckResult {
        label: label.to_string(),
        target_url: target_url.to_string(),
        outcome: CheckOutcome::TransportError(message),
        elapsed: start.elapsed(),
        notes: Vec::new(),
    }
}

/// Egress IP check: asks an echo service which IP the proxy presents.
pub async fn check_origin(client: &dyn ProbeClient, timeout_ms: u32) -> CheckResult {
    let label = "获取出口 IP";
    let start = Instant::now();

    match client.get(ORIGIN_ECHO_URL.to_string(), timeout_ms).await {
        Ok(response) if response.status_code == 200 => {
            let origin = serde_json::from_slice::<OriginEcho>(&response.body)
                .map(|echo| echo.origin)
                .unwrap_or_else(|_| "unknown".to_string());
            CheckResult {
                label: label.to_string(),
                target_url: ORIGIN_ECHO_URL.to_string(),
                outcome: CheckOutcome::Success,
                elapsed: response.duration,
                notes: vec![format!("出口 IP: {}", origin)],
            }
        }
        Ok(response) => http_failure(label, ORIGIN_ECHO_URL, response.status_code, start),
        Err(message) => transport_error(label, ORIGIN_ECHO_URL, message, start),
    }
}

/// Plain forwarding check: fetches a well-known public page.
pub async fn check_plain_page(client: &dyn ProbeClient, timeout_ms: u32) -> CheckResult {
    let label = "请求普通网页";
    let start = Instant::now();

    match client.get(PLAIN_PAGE_URL.to_string(), timeout_ms).await {
        Ok(response) if response.status_code == 200 => CheckResult {
            label: label.to_string(),
            target_url: PLAIN_PAGE_URL.to_string(),
            outcome: CheckOutcome::Success,
            elapsed: response.duration,
            notes: vec![
                format!("状态码: {}", response.status_code),
                format!("内容长度: {} bytes", response.body.len()),
            ],
        },
        Ok(response) => http_failure(label, PLAIN_PAGE_URL, response.status_code, start),
        Err(message) => transport_error(label, PLAIN_PAGE_URL, message, start),
    }
}

/// CONNECT tunnel check: fetches an HTTPS endpoint through the proxy.
///
/// Only the status code is validated; response content is not inspected.
pub async fn check_https_tunnel(client: &dyn ProbeClient, timeout_ms: u32) -> CheckResult {
    let label = "HTTPS 请求 (通过 CONNECT)";
    let start = Instant::now();

    match client.get(HTTPS_TUNNEL_URL.to_string(), timeout_ms).await {
        Ok(response) if response.status_code == 200 => CheckResult {
            label: label.to_string(),
            target_url: HTTPS_TUNNEL_URL.to_string(),
            outcome: CheckOutcome::Success,
            elapsed: response.duration,
            notes: vec!["HTTPS 代理正常".to_string()],
        },
        Ok(response) => http_failure(label, HTTPS_TUNNEL_URL, response.status_code, start),
        Err(message) => transport_error(label, HTTPS_TUNNEL_URL, message, start),
    }
}

/// Run the three checks strictly in order on the invoking thread.
///
/// Each check runs unconditionally; a failing check never skips or alters
/// the ones after it.
pub async fn run_all_checks(client: &dyn ProbeClient, timeout_ms: u32) -> Vec<CheckResult> {
    let logger = DebugLogger::new();
    let mut results = Vec::with_capacity(3);

    for result in [
        check_origin(client, timeout_ms).await,
        check_plain_page(client, timeout_ms).await,
        check_https_tunnel(client, timeout_ms).await,
    ] {
        match &result.outcome {
            CheckOutcome::TransportError(message) => {
                logger.error("checks", &format!("{}: {}", result.label, message));
            }
            outcome => {
                logger.debug(
                    "checks",
                    &format!(
                        "{}: {:?} in {}ms",
                        result.label,
                        outcome,
                        result.elapsed.as_millis()
                    ),
                );
            }
        }
        results.push(result);
    }

    results
}
