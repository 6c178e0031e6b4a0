/*
[INPUT]:  Raw JSON response envelopes from Binance REST endpoints
[OUTPUT]: Shape-resolving response wrappers and the upstream error body
[POS]:    Data layer - response boundary types
[UPDATE]: When an endpoint's response shape changes
*/

use serde::{Deserialize, Serialize};

/// Body Binance returns for rejected requests, e.g. `{"code":-1121,"msg":"Invalid symbol."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub code: i64,
    pub msg: String,
}

/// An endpoint that answers with an object when filtered by symbol and an
/// array otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    Single(T),
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Single(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Single(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}
