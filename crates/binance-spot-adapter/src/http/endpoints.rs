/*
[INPUT]:  Logical REST operation names
[OUTPUT]: Fixed URL path per operation
[POS]:    HTTP layer - endpoint table shared by every client
[UPDATE]: When Binance moves an endpoint or a new operation is added
*/

/// REST operations known to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Klines,
    PriceTicker,
    Ticker24hr,
    HistoricalTrade,
    Order,
    TestOrder,
    OpenOrder,
    AllOrder,
    MyTrade,
}

/// Logical name and path for every endpoint
pub const ENDPOINTS: [(Endpoint, &str, &str); 9] = [
    (Endpoint::Klines, "klines", "/api/v1/klines"),
    (Endpoint::PriceTicker, "price_ticker", "/api/v3/ticker/price"),
    (Endpoint::Ticker24hr, "24hr_ticker", "/api/v3/ticker/24hr"),
    (Endpoint::HistoricalTrade, "historical_trade", "/api/v3/historicalTrades"),
    (Endpoint::Order, "order", "/api/v3/order"),
    // Not called by the client; order placement is out of scope.
    (Endpoint::TestOrder, "test_order", "/api/v3/order/test"),
    (Endpoint::OpenOrder, "open_order", "/api/v3/openOrders"),
    (Endpoint::AllOrder, "all_order", "/api/v3/allOrders"),
    (Endpoint::MyTrade, "my_trade", "/api/v3/myTrades"),
];

impl Endpoint {
    fn entry(self) -> (Endpoint, &'static str, &'static str) {
        ENDPOINTS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn path(self) -> &'static str {
        self.entry().2
    }

    pub fn from_name(name: &str) -> Option<Endpoint> {
        ENDPOINTS
            .iter()
            .find(|(_, entry_name, _)| *entry_name == name)
            .map(|(endpoint, _, _)| *endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum_discriminants() {
        for (index, (endpoint, _, _)) in ENDPOINTS.iter().enumerate() {
            assert_eq!(*endpoint as usize, index);
        }
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::Klines.path(), "/api/v1/klines");
        assert_eq!(Endpoint::PriceTicker.path(), "/api/v3/ticker/price");
        assert_eq!(Endpoint::Ticker24hr.path(), "/api/v3/ticker/24hr");
        assert_eq!(Endpoint::HistoricalTrade.path(), "/api/v3/historicalTrades");
        assert_eq!(Endpoint::Order.path(), "/api/v3/order");
        assert_eq!(Endpoint::OpenOrder.path(), "/api/v3/openOrders");
        assert_eq!(Endpoint::AllOrder.path(), "/api/v3/allOrders");
        assert_eq!(Endpoint::MyTrade.path(), "/api/v3/myTrades");
    }

    #[test]
    fn lookup_by_logical_name() {
        assert_eq!(Endpoint::from_name("24hr_ticker"), Some(Endpoint::Ticker24hr));
        assert_eq!(Endpoint::from_name("test_order"), Some(Endpoint::TestOrder));
        assert_eq!(Endpoint::from_name("withdraw"), None);
        assert_eq!(Endpoint::OpenOrder.name(), "open_order");
    }
}
