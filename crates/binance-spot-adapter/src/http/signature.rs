/*
[INPUT]:  Ordered query parameters and the API secret
[OUTPUT]: HMAC-SHA256 hex signature appended as the `signature` parameter
[POS]:    HTTP layer - request signing for account endpoints
[UPDATE]: When changing signing algorithm or parameter format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::params::QueryParams;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_PARAM: &str = "signature";

/// Signs query strings with the account's API secret
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Lowercase hex HMAC-SHA256 of `payload` keyed by the secret
    pub fn sign(&self, payload: &str) -> String {
        // HMAC accepts keys of any length, so this cannot fail.
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .unwrap_or_else(|_| unreachable!("HMAC key length is unrestricted"));
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Sign `params` in place, appending `signature` as the last pair
    ///
    /// A `signature` already present is dropped first so the hash never
    /// covers a previous signature and the request carries exactly one.
    pub fn sign_params(&self, params: &mut QueryParams) {
        params.remove(SIGNATURE_PARAM);
        let signature = self.sign(&params.to_query_string());
        params.push(SIGNATURE_PARAM, signature);
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
