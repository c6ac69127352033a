//! Tests to verify that all public types are Send + Sync.

use genclient_core::cli::{ExitCode, OutputFormat};
use genclient_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_domain_types_are_send_sync() {
    assert_send_sync::<ClientInfo>();
    assert_send_sync::<FunctionPart>();
    assert_send_sync::<ServiceName>();
}

#[test]
fn test_config_is_send_sync() {
    assert_send_sync::<GeneratorConfig>();
}

#[test]
fn test_cli_types_are_send_sync() {
    assert_send_sync::<OutputFormat>();
    assert_send_sync::<ExitCode>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}
