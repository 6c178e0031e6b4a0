/*
[INPUT]:  HTTP configuration (base URL, timeouts), API key and secret
[OUTPUT]: Configured blocking client that sends public, keyed and signed GETs
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request dispatch
*/

use chrono::Utc;
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::http::endpoints::Endpoint;
use crate::http::error::{BinanceError, Result};
use crate::http::params::QueryParams;
use crate::http::signature::RequestSigner;
use crate::types::ApiErrorResponse;

/// Base URL for the Binance Spot REST API
pub const BINANCE_BASE_URL: &str = "https://api.binance.com";

/// Header carrying the API key on account endpoints
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

const TIMESTAMP_PARAM: &str = "timestamp";

/// HTTP client configuration
///
/// Both timeouts default to `None`, meaning requests wait until the
/// transport itself gives up.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// API key and secret; the secret is only ever used as the HMAC key
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &redacted(&self.api_key))
            .field("api_secret", &redacted(&self.api_secret))
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "<unset>" } else { "<redacted>" }
}

/// How a request proves who is calling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    None,
    ApiKey,
    Signed,
}

/// Main HTTP client for the Binance Spot REST API
#[derive(Debug)]
pub struct BinanceClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
}

impl BinanceClient {
    /// Create a new client against the production API with default configuration
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, api_secret, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::with_config_and_base_url(api_key, api_secret, config, BINANCE_BASE_URL)
    }

    /// Create a new client against another host (testnet, mock server)
    pub fn with_config_and_base_url(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| BinanceError::Config(format!("failed to build HTTP client: {err}")))?;

        let credentials = Credentials::new(api_key, api_secret);
        let signer = RequestSigner::new(credentials.api_secret());

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials,
            signer,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append an HMAC-SHA256 `signature` computed over `params` as they stand
    ///
    /// Anything pushed after this call is not covered by the signature and
    /// the server will reject the request.
    pub fn sign_request(&self, params: &mut QueryParams) {
        self.signer.sign_params(params);
    }

    /// Full URL for an endpoint with the query string attached verbatim
    pub fn endpoint_url(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Url> {
        let mut url = self.base_url.join(endpoint.path())?;
        if !params.is_empty() {
            url.set_query(Some(&params.to_query_string()));
        }
        Ok(url)
    }

    pub(crate) fn public_get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<T> {
        self.get(endpoint, params, Auth::None)
    }

    pub(crate) fn keyed_get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<T> {
        self.get(endpoint, params, Auth::ApiKey)
    }

    pub(crate) fn signed_get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<T> {
        self.get(endpoint, params, Auth::Signed)
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        mut params: QueryParams,
        auth: Auth,
    ) -> Result<T> {
        if auth == Auth::Signed {
            params.push(TIMESTAMP_PARAM, Utc::now().timestamp_millis());
            self.sign_request(&mut params);
        }

        let url = self.endpoint_url(endpoint, &params)?;
        debug!(
            endpoint = endpoint.name(),
            path = endpoint.path(),
            auth = ?auth,
            param_count = params.len(),
            "sending binance request"
        );

        let mut builder = self.http_client.get(url);
        if auth != Auth::None {
            builder = builder.header(API_KEY_HEADER, self.credentials.api_key());
        }
        self.send_json(endpoint, builder)
    }

    fn send_json<T: DeserializeOwned>(&self, endpoint: Endpoint, builder: RequestBuilder) -> Result<T> {
        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;

        if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
            warn!(
                endpoint = endpoint.name(),
                status = status.as_u16(),
                code = api_error.code,
                message = %api_error.msg,
                "binance api error"
            );
            return Err(BinanceError::Api {
                code: api_error.code,
                message: api_error.msg,
            });
        }

        if !status.is_success() {
            warn!(
                endpoint = endpoint.name(),
                status = status.as_u16(),
                bytes = body.len(),
                "binance request failed"
            );
            return Err(BinanceError::api_error(status, body));
        }

        if body.trim().is_empty() {
            return Err(BinanceError::InvalidResponse(format!(
                "empty body from {} ({status})",
                endpoint.path()
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_makes_no_request() {
        let client = BinanceClient::new("key", "secret").expect("client init");
        assert_eq!(client.base_url().as_str(), "https://api.binance.com/");
        assert_eq!(client.credentials().api_key(), "key");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = BinanceClient::with_config_and_base_url("k", "s", ClientConfig::default(), "not a url")
            .unwrap_err();
        assert!(matches!(err, BinanceError::UrlParse(_)));
    }

    #[test]
    fn test_endpoint_url_keeps_parameter_order() {
        let client = BinanceClient::new("key", "secret").expect("client init");
        let params = QueryParams::new().with("symbol", "BTCUSDT").with("interval", "1h");

        let url = client.endpoint_url(Endpoint::Klines, &params).expect("url");

        assert_eq!(
            url.as_str(),
            "https://api.binance.com/api/v1/klines?symbol=BTCUSDT&interval=1h"
        );
    }

    #[test]
    fn test_endpoint_url_without_params_has_no_query() {
        let client = BinanceClient::new("key", "secret").expect("client init");
        let url = client
            .endpoint_url(Endpoint::PriceTicker, &QueryParams::new())
            .expect("url");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_sign_request_uses_api_secret() {
        let client = BinanceClient::new("key", "secret").expect("client init");
        let mut params = QueryParams::new().with("symbol", "BTCUSDT").with("timestamp", 1);

        client.sign_request(&mut params);

        let expected = RequestSigner::new("secret").sign("symbol=BTCUSDT&timestamp=1");
        assert_eq!(params.get("signature"), Some(expected.as_str()));
    }

    #[test]
    fn test_credentials_debug_redacts_key_and_secret() {
        let credentials = Credentials::new("public-key", "private-secret");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("public-key"));
        assert!(!debug.contains("private-secret"));
        assert_eq!(credentials.api_key(), "public-key");
    }

    #[test]
    fn test_client_debug_does_not_leak_credentials() {
        let client = BinanceClient::new("public-key", "private-secret").expect("client init");
        let debug = format!("{client:?}");
        assert!(!debug.contains("public-key"));
        assert!(!debug.contains("private-secret"));
    }
}
