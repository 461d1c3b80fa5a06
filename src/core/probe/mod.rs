//! Proxy connectivity probe.
//!
//! Three sequential checks against a fixed proxy endpoint:
//! - egress IP through plain forwarding
//! - plain page fetch
//! - HTTPS fetch over a CONNECT tunnel
//!
//! Checks never propagate failures; every outcome becomes a report line.

pub mod checks;
pub mod client;
pub mod debug;
pub mod report;
pub mod types;

pub use checks::{check_https_tunnel, check_origin, check_plain_page, run_all_checks};
pub use client::{ProbeClient, ProbeResponse};
pub use debug::DebugLogger;
pub use report::{render_check, render_report};
pub use types::{CheckOutcome, CheckResult, ProbeError};

#[cfg(feature = "network-probe")]
pub use client::IsahcProbeClient;

#[cfg(not(feature = "network-probe"))]
pub use client::MockProbeClient;
