//! Console report rendering.
//!
//! Pure data-to-string conversion; main prints the result. Passing lines
//! carry `[OK]`, non-200 statuses `[FAIL]`, transport faults `[ERROR]`.

use crate::core::probe::types::{CheckOutcome, CheckResult};

const BANNER_WIDTH: usize = 50;

fn banner(title: &str) -> String {
    let line = "=".repeat(BANNER_WIDTH);
    format!("{}\n  {}\n{}\n", line, title, line)
}

/// Render one `[TEST n]` section.
pub fn render_check(number: usize, result: &CheckResult) -> String {
    let mut out = format!("[TEST {}] {}...\n", number, result.label);
    match &result.outcome {
        CheckOutcome::Success => {
            for note in &result.notes {
                out.push_str(&format!("  [OK] {}\n", note));
            }
            out.push_str(&format!(
                "  [OK] 响应时间: {:.2}s\n",
                result.elapsed.as_secs_f64()
            ));
        }
        CheckOutcome::HttpFailure(status) => {
            out.push_str(&format!("  [FAIL] HTTP {}\n", status));
        }
        CheckOutcome::TransportError(message) => {
            out.push_str(&format!("  [ERROR] {}\n", message));
        }
    }
    out
}

/// Render the full report for one probe run.
pub fn render_report(proxy_url: &str, results: &[CheckResult]) -> String {
    let mut out = banner("代理连通性测试");
    out.push('\n');
    out.push_str(&format!("代理地址: {}\n\n", proxy_url));

    for (index, result) in results.iter().enumerate() {
        out.push_str(&render_check(index + 1, result));
        out.push('\n');
    }

    out.push_str(&banner("测试完成"));
    out
}
