/*
[INPUT]:  Per-call request parameters in insertion order
[OUTPUT]: Ordered query pairs and the exact query string sent on the wire
[POS]:    HTTP layer - request parameter assembly
[UPDATE]: When query encoding or parameter handling changes
*/

use url::form_urlencoded;

/// Ordered `(name, value)` query parameters
///
/// Insertion order is preserved because signed requests hash the query
/// string exactly as it is sent; the server recomputes over the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    /// Push only when a value is present
    pub fn push_opt<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    pub fn with_opt<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.push_opt(name, value);
        self
    }

    /// First value stored under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove every pair named `name`, returning how many were removed
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|(key, _)| key != name);
        before - self.pairs.len()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// `name=value` pairs joined with `&`, form-urlencoded, in insertion order
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let params = QueryParams::new()
            .with("symbol", "BTCUSDT")
            .with("orderId", 42)
            .with("limit", 10)
            .with("timestamp", 1_499_827_319_559i64);

        assert_eq!(
            params.to_query_string(),
            "symbol=BTCUSDT&orderId=42&limit=10&timestamp=1499827319559"
        );
        assert_eq!(
            params.names().collect::<Vec<_>>(),
            vec!["symbol", "orderId", "limit", "timestamp"]
        );
    }

    #[test]
    fn absent_optional_values_are_skipped() {
        let params = QueryParams::new()
            .with("symbol", "BTCUSDT")
            .with_opt("limit", None::<u32>)
            .with_opt("fromId", Some(7u64));

        assert_eq!(params.to_query_string(), "symbol=BTCUSDT&fromId=7");
        assert!(!params.contains("limit"));
        assert_eq!(params.get("fromId"), Some("7"));
    }

    #[test]
    fn empty_params_produce_empty_query() {
        let params = QueryParams::new().with_opt("symbol", None::<&str>);
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let params = QueryParams::new().with("clientOrderId", "a b&c");
        assert_eq!(params.to_query_string(), "clientOrderId=a+b%26c");
    }

    #[test]
    fn remove_drops_all_matching_pairs() {
        let mut params = QueryParams::new()
            .with("signature", "a")
            .with("symbol", "BTCUSDT")
            .with("signature", "b");

        assert_eq!(params.remove("signature"), 2);
        assert_eq!(params.len(), 1);
        assert_eq!(params.remove("signature"), 0);
    }
}
