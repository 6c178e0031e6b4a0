/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-spot-adapter tests

use binance_spot_adapter::{BinanceClient, ClientConfig};
use wiremock::MockServer;

pub const API_KEY: &str = "vmPUZE6mv9SD5VNHk4HlWFsOr6aKE2zvsw0MuIgwCIPy6utIco14y7Ju91duEh8A";
pub const API_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Run a blocking client call against `server` off the async runtime
pub async fn call_blocking<T, F>(server: &MockServer, call: F) -> T
where
    F: FnOnce(&BinanceClient) -> T + Send + 'static,
    T: Send + 'static,
{
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client =
            BinanceClient::with_config_and_base_url(API_KEY, API_SECRET, ClientConfig::default(), &uri)
                .expect("client init");
        call(&client)
    })
    .await
    .expect("blocking task panicked")
}

/// One kline row in the positional layout Binance returns
#[allow(dead_code)]
pub fn kline_row(open_time_ms: i64, close: &str) -> serde_json::Value {
    serde_json::json!([
        open_time_ms,
        "100.0",
        "110.0",
        "90.0",
        close,
        "12.5",
        open_time_ms + 59_999,
        "1250.0",
        42,
        "6.0",
        "600.0",
        "0"
    ])
}
