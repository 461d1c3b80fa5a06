pub mod cli;
pub mod config;
pub mod core;

pub use crate::config::ProxyEndpoint;
pub use crate::core::probe::{CheckOutcome, CheckResult, ProbeClient, ProbeResponse};
