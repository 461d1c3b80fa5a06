//! Env-gated debug logging for probe lifecycle events.
//!
//! Enabled only when `PROXYPROBE_DEBUG=true`. Lines go to stderr so they
//! never mix with the stdout report.

use chrono::Local;

use crate::core::probe::types::parse_env_bool;

const DEBUG_ENV_VAR: &str = "PROXYPROBE_DEBUG";

pub struct DebugLogger {
    enabled: bool,
}

impl DebugLogger {
    pub fn new() -> Self {
        Self {
            enabled: parse_env_bool(DEBUG_ENV_VAR),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn debug(&self, component: &str, message: &str) {
        self.log("DEBUG", component, message);
    }

    pub fn error(&self, component: &str, message: &str) {
        self.log("ERROR", component, message);
    }

    fn log(&self, level: &str, component: &str, message: &str) {
        if !self.enabled {
            return;
        }
        eprintln!(
            "[{}] [{}] [{}] {}",
            Local::now().to_rfc3339(),
            level,
            component,
            message
        );
    }
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new()
    }
}
