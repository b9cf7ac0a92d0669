//! Integration tests for CLI argument handling
//!
//! Tests required configuration and validation from the command line.

use std::process::Command;

/// Helper to run the binary with given args and no roster configuration in
/// the environment
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hsa-roster"))
        .args(args)
        .env_remove("API_URL")
        .env_remove("API_KEY")
        .env_remove("PORT")
        .output()
        .expect("Failed to execute hsa-roster")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hsa-roster"), "Help should mention hsa-roster");
    assert!(stdout.contains("--api-url"), "Help should mention --api-url");
    assert!(stdout.contains("API_KEY"), "Help should mention the API_KEY variable");
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_api_url_fails() {
    let output = run_cli(&["--api-key", "secret"]);
    assert!(
        !output.status.success(),
        "Expected missing API URL to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--api-url"), "Error should name the missing flag");
}

#[test]
fn test_missing_api_key_fails() {
    let output = run_cli(&["--api-url", "http://127.0.0.1:1/roster"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--api-key"));
}

#[test]
fn test_api_url_from_environment_is_validated() {
    let output = Command::new(env!("CARGO_BIN_EXE_hsa-roster"))
        .env("API_URL", "ftp://example.com/roster")
        .env("API_KEY", "secret")
        .output()
        .expect("Failed to execute hsa-roster");

    assert!(!output.status.success(), "Expected non-http URL to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ftp://example.com/roster"));
}

#[test]
fn test_empty_port_from_environment_falls_back_to_default() {
    // Configuration parsing must get past PORT and fail on the URL instead
    let output = Command::new(env!("CARGO_BIN_EXE_hsa-roster"))
        .env("PORT", "")
        .env("API_URL", "ftp://example.com/roster")
        .env("API_KEY", "secret")
        .output()
        .expect("Failed to execute hsa-roster");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("PORT"), "Empty PORT should not be an error: {}", stderr);
    assert!(stderr.contains("ftp://example.com/roster"));
}

#[test]
fn test_oversized_cache_ttl_is_a_config_error() {
    let output = run_cli(&[
        "--api-url",
        "http://127.0.0.1:1/roster",
        "--api-key",
        "secret",
        "--cache-ttl-hours",
        "18446744073709551615",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CacheTtlTooLarge"), "Expected a config error: {}", stderr);
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_invalid_port_fails() {
    let output = run_cli(&[
        "--api-url",
        "http://127.0.0.1:1/roster",
        "--api-key",
        "secret",
        "--port",
        "99999",
    ]);
    assert!(!output.status.success());
}
