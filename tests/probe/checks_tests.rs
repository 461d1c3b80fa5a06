//! Tests for the three connectivity checks and their orchestration.

use proxyprobe::config::{HTTPS_TUNNEL_URL, ORIGIN_ECHO_URL, PLAIN_PAGE_URL};
use proxyprobe::core::probe::{
    check_https_tunnel, check_origin, check_plain_page, render_report, run_all_checks,
    CheckOutcome,
};

use super::common::{ok_response, response, ScriptedClient};

const TIMEOUT_MS: u32 = 30_000;

fn healthy_client() -> ScriptedClient {
    ScriptedClient::new()
        .respond(ORIGIN_ECHO_URL, ok_response(br#"{"origin": "203.0.113.5"}"#))
        .respond(PLAIN_PAGE_URL, ok_response(b"<html>hello</html>"))
        .respond(HTTPS_TUNNEL_URL, ok_response(br#"{"headers": {}}"#))
}

#[tokio::test]
async fn origin_check_reports_egress_ip() {
    let client = healthy_client();

    let result = check_origin(&client, TIMEOUT_MS).await;

    assert_eq!(result.outcome, CheckOutcome::Success);
    assert_eq!(result.notes, vec!["出口 IP: 203.0.113.5".to_string()]);
    assert!(result.elapsed.as_millis() > 0);
}

#[tokio::test]
async fn origin_check_tolerates_unexpected_body() {
    let client = ScriptedClient::new().respond(ORIGIN_ECHO_URL, ok_response(b"not json"));

    let result = check_origin(&client, TIMEOUT_MS).await;

    // A 200 with an unparseable body is still a pass; the IP is unknown.
    assert_eq!(result.outcome, CheckOutcome::Success);
    assert_eq!(result.notes, vec!["出口 IP: unknown".to_string()]);
}

#[tokio::test]
async fn plain_page_check_reports_status_and_length() {
    let client = healthy_client();

    let result = check_plain_page(&client, TIMEOUT_MS).await;

    assert_eq!(result.outcome, CheckOutcome::Success);
    assert_eq!(
        result.notes,
        vec!["状态码: 200".to_string(), "内容长度: 18 bytes".to_string()]
    );
}

#[tokio::test]
async fn https_tunnel_check_validates_status_only() {
    // Arbitrary body: the tunnel check must not inspect content.
    let client = ScriptedClient::new().respond(HTTPS_TUNNEL_URL, ok_response(b"anything at all"));

    let result = check_https_tunnel(&client, TIMEOUT_MS).await;

    assert_eq!(result.outcome, CheckOutcome::Success);
}

#[tokio::test]
async fn non_200_status_becomes_http_failure() {
    let client = ScriptedClient::new().respond(ORIGIN_ECHO_URL, response(502, b"bad gateway"));

    let result = check_origin(&client, TIMEOUT_MS).await;

    assert_eq!(result.outcome, CheckOutcome::HttpFailure(502));
    assert!(result.notes.is_empty());
}

#[tokio::test]
async fn transport_fault_becomes_transport_error() {
    let client = ScriptedClient::new().fail(PLAIN_PAGE_URL, "connection refused");

    let result = check_plain_page(&client, TIMEOUT_MS).await;

    assert_eq!(
        result.outcome,
        CheckOutcome::TransportError("connection refused".to_string())
    );
}

#[tokio::test]
async fn unreachable_proxy_reports_error_for_all_checks() {
    // Scenario: proxy refuses every connection.
    let client = ScriptedClient::unreachable("connection refused");

    let results = run_all_checks(&client, TIMEOUT_MS).await;

    assert_eq!(results.len(), 3);
    for result in &results {
        assert_eq!(
            result.outcome,
            CheckOutcome::TransportError("connection refused".to_string())
        );
    }

    let report = render_report("http://127.0.0.1:8888", &results);
    assert_eq!(report.matches("[ERROR]").count(), 3);
    assert!(report.contains("测试完成"));
}

#[tokio::test]
async fn failing_check_does_not_skip_the_others() {
    // Scenario: plain page forbidden, the two other checks fine.
    let client = ScriptedClient::new()
        .respond(ORIGIN_ECHO_URL, ok_response(br#"{"origin": "203.0.113.5"}"#))
        .respond(PLAIN_PAGE_URL, response(403, b"forbidden"))
        .respond(HTTPS_TUNNEL_URL, ok_response(b"{}"));

    let results = run_all_checks(&client, TIMEOUT_MS).await;

    assert_eq!(results[0].outcome, CheckOutcome::Success);
    assert_eq!(results[1].outcome, CheckOutcome::HttpFailure(403));
    assert_eq!(results[2].outcome, CheckOutcome::Success);

    let report = render_report("http://127.0.0.1:8888", &results);
    assert!(report.contains("[FAIL] HTTP 403"));
    assert!(report.contains("203.0.113.5"));
}

#[tokio::test]
async fn checks_run_in_fixed_order() {
    let client = healthy_client();

    let results = run_all_checks(&client, TIMEOUT_MS).await;

    let targets: Vec<&str> = results.iter().map(|r| r.target_url.as_str()).collect();
    assert_eq!(targets, vec![ORIGIN_ECHO_URL, PLAIN_PAGE_URL, HTTPS_TUNNEL_URL]);
}

#[tokio::test]
async fn repeated_runs_yield_equal_outcome_categories() {
    let client = ScriptedClient::new()
        .respond(ORIGIN_ECHO_URL, ok_response(br#"{"origin": "203.0.113.5"}"#))
        .respond(PLAIN_PAGE_URL, response(403, b"forbidden"))
        .fail(HTTPS_TUNNEL_URL, "timeout");

    let first = run_all_checks(&client, TIMEOUT_MS).await;
    let second = run_all_checks(&client, TIMEOUT_MS).await;

    let categories = |results: &[proxyprobe::core::probe::CheckResult]| {
        results.iter().map(|r| r.outcome.clone()).collect::<Vec<_>>()
    };
    assert_eq!(categories(&first), categories(&second));
}
