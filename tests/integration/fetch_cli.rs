//! Binary-level CLI tests
//!
//! Validation failures must block before any network activity, so most of
//! these run without a provider; the end-to-end case uses a mock server.

use assert_cmd::Command;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run(args: &[&str]) -> std::process::Output {
    Command::cargo_bin("market-data-exporter")
        .unwrap()
        .args(args)
        .output()
        .unwrap()
}

fn combined_output(output: &std::process::Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn test_fetch_rejects_zero_interval_amount() {
    let output = run(&[
        "fetch",
        "--ticker",
        "AAPL",
        "--interval-amount",
        "0",
        "--interval-unit",
        "minutes",
        "--period-unit",
        "max",
    ]);

    assert!(!output.status.success());
    let all = combined_output(&output);
    assert!(all.contains("invalid amount"), "unexpected output: {all}");
}

#[test]
fn test_fetch_rejects_missing_interval_amount() {
    let output = run(&[
        "fetch",
        "--ticker",
        "AAPL",
        "--interval-unit",
        "hours",
        "--period-unit",
        "ytd",
    ]);

    assert!(!output.status.success());
    let all = combined_output(&output);
    assert!(all.contains("invalid amount"), "unexpected output: {all}");
}

#[test]
fn test_fetch_rejects_unknown_units() {
    let output = run(&[
        "fetch",
        "--ticker",
        "AAPL",
        "--interval-amount",
        "1",
        "--interval-unit",
        "weeks",
        "--period-unit",
        "max",
    ]);

    assert!(!output.status.success());
    let all = combined_output(&output);
    assert!(all.contains("invalid unit"), "unexpected output: {all}");
}

#[test]
fn test_tickers_lists_builtin_symbols() {
    let output = run(&["tickers"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AAPL"));
    assert!(stdout.contains("BTC-USD"));
    assert!(stdout.contains("QQQ"));
    assert_eq!(stdout.lines().count(), 15);
}

#[test]
fn test_help_succeeds() {
    let output = run(&["--help"]);
    assert!(output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_end_to_end_exports_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetch"))
        .and(query_param("ticker", "AAPL"))
        .and(query_param("interval", "1d"))
        .and(query_param("period", "max"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "Date": "2024-01-01", "Close": 158 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let uri = server.uri();
    let out_dir = temp_dir.path().to_str().unwrap().to_string();

    let output = tokio::task::spawn_blocking(move || {
        Command::cargo_bin("market-data-exporter")
            .unwrap()
            .args([
                "--base-url",
                &uri,
                "fetch",
                "--ticker",
                "aapl",
                "--interval-amount",
                "1",
                "--interval-unit",
                "days",
                "--period-unit",
                "max",
                "--export",
                "--out-dir",
                &out_dir,
            ])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "fetch failed: {}",
        combined_output(&output)
    );

    let exported = temp_dir.path().join("AAPL_1d_max.csv");
    let contents = std::fs::read_to_string(&exported).unwrap();
    assert_eq!(contents, "Date,Close\n\"2024-01-01\",\"158\"");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2024-01-01"), "preview missing: {stdout}");
}
