/*
[INPUT]:  Wiremock server address and a blocking client call
[OUTPUT]: Call result produced off the async test runtime
[POS]:    HTTP layer - shared unit test support
[UPDATE]: When client construction for tests changes
*/

use wiremock::MockServer;

use crate::http::{BinanceClient, ClientConfig};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Build a client for `server` and run `call` on the blocking pool.
///
/// The blocking client must be created, used and dropped outside the async
/// runtime's worker threads.
pub async fn with_client<T, F>(server: &MockServer, call: F) -> T
where
    F: FnOnce(&BinanceClient) -> T + Send + 'static,
    T: Send + 'static,
{
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = BinanceClient::with_config_and_base_url(
            TEST_API_KEY,
            TEST_API_SECRET,
            ClientConfig::default(),
            &uri,
        )
        .expect("client init");
        call(&client)
    })
    .await
    .expect("blocking task panicked")
}
