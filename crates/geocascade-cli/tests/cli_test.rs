//! Process-level tests for the `geocode` binary: exit codes and what lands
//! on stdout versus stderr.

use std::process::{Command, Output};

/// Run `geocode` with a clean environment so no API key or
/// `GEOCODE_PROVIDER` leaks in from the host.
fn geocode(args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_geocode"))
        .env_clear()
        .envs(env.iter().copied())
        .args(args)
        .output()
        .expect("failed to run geocode")
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_no_address_prints_usage_and_exits_1() {
    let output = geocode(&[], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        lines(&output.stderr),
        ["Usage: geocode --provider <provider> <address>"]
    );
}

#[test]
fn test_provider_flag_without_address_is_usage_error() {
    let output = geocode(&["--provider", "google"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: geocode"));
}

#[test]
fn test_list_providers_in_table_order() {
    let output = geocode(&["--list-providers"], &[("OPENCAGE_KEY", "k")]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = lines(&output.stdout);
    let names: Vec<&str> = stdout
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        ["google", "positionstack", "opencage", "locationiq", "mapquest", "osm"]
    );
    assert!(stdout[0].ends_with("GOOGLE_API_KEY (not set)"));
    assert!(stdout[2].ends_with("OPENCAGE_KEY (set)"));
    assert!(stdout[5].ends_with("(no key required)"));
}

#[test]
fn test_all_providers_failing_exits_1() {
    // The keyless provider is routed through a dead local proxy, so its
    // request fails without leaving the machine.
    let output = geocode(
        &["--provider", "bogus", "zzqx", "no-such-place", "8f3a1c"],
        &[
            ("HTTP_PROXY", "http://127.0.0.1:9"),
            ("HTTPS_PROXY", "http://127.0.0.1:9"),
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = lines(&output.stderr);
    assert_eq!(
        stderr.first().map(String::as_str),
        Some("Warning: provider 'bogus' not recognized. Falling back to available providers.")
    );
    assert!(stderr.contains(&"Provider google failed: GOOGLE_API_KEY not set".to_string()));
    assert!(stderr.contains(&"Provider mapquest failed: MAPQUEST_KEY not set".to_string()));
    assert!(stderr.iter().any(|line| line.starts_with("Provider osm failed: ")));
    assert_eq!(stderr.last().map(String::as_str), Some("All providers failed"));
}

#[test]
fn test_missing_key_for_preferred_provider_warns_first() {
    let output = geocode(
        &["--provider", "google", "Eiffel", "Tower"],
        &[
            ("HTTP_PROXY", "http://127.0.0.1:9"),
            ("HTTPS_PROXY", "http://127.0.0.1:9"),
        ],
    );
    assert_eq!(output.status.code(), Some(1));

    let stderr = lines(&output.stderr);
    assert_eq!(
        stderr[..2],
        [
            "Warning: API key for provider 'google' not set in environment variable \
             GOOGLE_API_KEY. Falling back to other providers.",
            "Provider google failed: GOOGLE_API_KEY not set",
        ]
    );
    assert_eq!(stderr.last().map(String::as_str), Some("All providers failed"));
}
