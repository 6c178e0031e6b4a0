use std::process::{Command, Output};

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BINARY: &str = env!("CARGO_BIN_EXE_binance-spot");

/// Run the binary off the async runtime with a clean credential environment.
async fn run_cli(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(BINARY)
            .args(&args)
            .env_remove("BINANCE_API_KEY")
            .env_remove("BINANCE_API_SECRET")
            .env_remove("BINANCE_BASE_URL")
            .env("RUST_LOG", "error")
            .output()
            .expect("Failed to start binance-spot binary")
    })
    .await
    .expect("blocking task panicked")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[tokio::test]
async fn price_prints_a_table_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/price"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"symbol": "BTCUSDT", "price": "64000.10"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(vec![
        "--base-url".into(),
        server.uri(),
        "price".into(),
        "--symbol".into(),
        "BTCUSDT".into(),
    ])
    .await;

    assert_success(&output);
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("symbol") && lines[0].contains("price"));
    assert!(lines[1].contains("BTCUSDT") && lines[1].ends_with("64000.10"));
}

#[tokio::test]
async fn open_orders_as_json_with_config_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/openOrders"))
        .and(header("X-MBX-APIKEY", "file-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config_path = std::env::temp_dir().join(format!(
        "binance-spot-cli-test-{}.yaml",
        std::process::id()
    ));
    std::fs::write(
        &config_path,
        format!(
            "api_key: file-key\napi_secret: file-secret\nbase_url: {}\n",
            server.uri()
        ),
    )
    .expect("write config");

    let output = run_cli(vec![
        "--config".into(),
        config_path.display().to_string(),
        "--format".into(),
        "json".into(),
        "open-orders".into(),
    ])
    .await;
    let _ = std::fs::remove_file(&config_path);

    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(value, serde_json::json!([]));

    let requests = server.received_requests().await.expect("recorded requests");
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(query.contains("timestamp="));
    assert!(query.contains("&signature="));
}

#[tokio::test]
async fn signed_command_without_credentials_fails_before_any_request() {
    let server = MockServer::start().await;

    let output = run_cli(vec![
        "--base-url".into(),
        server.uri(),
        "order".into(),
        "--symbol".into(),
        "BTCUSDT".into(),
        "--order-id".into(),
        "1".into(),
    ])
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("needs an API key and secret"), "stderr: {stderr}");
    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn upstream_error_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/24hr"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"code": -1121, "msg": "Invalid symbol."})),
        )
        .mount(&server)
        .await;

    let output = run_cli(vec![
        "--base-url".into(),
        server.uri(),
        "ticker".into(),
        "--symbol".into(),
        "NOPE".into(),
    ])
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid symbol."), "stderr: {stderr}");
}
