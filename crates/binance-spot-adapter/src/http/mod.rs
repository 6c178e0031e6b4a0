/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod public;
pub mod signature;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{BinanceError, Result};
pub use endpoints::{ENDPOINTS, Endpoint};
pub use params::QueryParams;
pub use signature::{RequestSigner, SIGNATURE_PARAM};

pub use client::{API_KEY_HEADER, BINANCE_BASE_URL, BinanceClient, ClientConfig, Credentials};
