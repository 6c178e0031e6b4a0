/*
[INPUT]:  Error sources (transport, upstream API bodies, JSON, URL, client setup)
[OUTPUT]: Structured error type with auth classification
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Binance error codes that mean the credentials or signature were refused
const AUTH_ERROR_CODES: [i64; 3] = [-1022, -2014, -2015];

/// Main error type for the Binance adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BinanceError {
    /// Check if error indicates rejected credentials or signature
    pub fn is_auth_error(&self) -> bool {
        match self {
            BinanceError::Api { code, .. } => {
                AUTH_ERROR_CODES.contains(code) || *code == i64::from(StatusCode::UNAUTHORIZED.as_u16())
            }
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BinanceError::Api {
            code: i64::from(status.as_u16()),
            message: message.into(),
        }
    }
}

/// Result type alias for Binance operations
pub type Result<T> = std::result::Result<T, BinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        let bad_signature = BinanceError::Api {
            code: -1022,
            message: "Signature for this request is not valid.".to_string(),
        };
        assert!(bad_signature.is_auth_error());
        assert!(BinanceError::api_error(StatusCode::UNAUTHORIZED, "no key").is_auth_error());

        let bad_symbol = BinanceError::Api {
            code: -1121,
            message: "Invalid symbol.".to_string(),
        };
        assert!(!bad_symbol.is_auth_error());
        assert!(!BinanceError::Config("tls".to_string()).is_auth_error());
    }

    #[test]
    fn test_api_error_creation() {
        let err = BinanceError::api_error(StatusCode::BAD_GATEWAY, "upstream down");
        match err {
            BinanceError::Api { code, message } => {
                assert_eq!(code, 502);
                assert_eq!(message, "upstream down");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = BinanceError::Api {
            code: -1121,
            message: "Invalid symbol.".to_string(),
        };
        assert_eq!(err.to_string(), "API error (code -1121): Invalid symbol.");
    }
}
