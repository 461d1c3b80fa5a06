//! Tests for the env-gated debug logger.

use std::env;

use proxyprobe::core::probe::types::parse_env_bool;
use proxyprobe::core::probe::DebugLogger;
use serial_test::serial;

const DEBUG_VAR: &str = "PROXYPROBE_DEBUG";

#[test]
#[serial]
fn logger_disabled_by_default() {
    env::remove_var(DEBUG_VAR);
    let logger = DebugLogger::new();
    assert!(!logger.is_enabled());
}

#[test]
#[serial]
fn logger_enabled_by_env() {
    env::set_var(DEBUG_VAR, "true");
    let logger = DebugLogger::new();
    assert!(logger.is_enabled());
    env::remove_var(DEBUG_VAR);
}

#[test]
#[serial]
fn env_bool_parsing_is_strict() {
    let cases = vec![
        ("true", true),
        ("TRUE", true),
        ("false", false),
        ("1", false),
        ("yes", false),
        ("", false),
    ];

    for (value, expected) in cases {
        env::set_var(DEBUG_VAR, value);
        assert_eq!(parse_env_bool(DEBUG_VAR), expected, "value: {:?}", value);
    }

    env::remove_var(DEBUG_VAR);
    assert!(!parse_env_bool(DEBUG_VAR));
}

#[test]
#[serial]
fn disabled_logger_swallows_messages() {
    env::remove_var(DEBUG_VAR);
    let logger = DebugLogger::new();

    // Should not panic when disabled.
    logger.debug("checks", "test message");
    logger.error("checks", "test error");
}
