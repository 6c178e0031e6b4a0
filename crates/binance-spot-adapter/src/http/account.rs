/*
[INPUT]:  Symbols, order ids, pagination limits and the account's API key/secret
[OUTPUT]: Account data (historical trades, order status, open/all orders, fills)
[POS]:    HTTP layer - account endpoints (API key header, mostly signed)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

// ### Account Endpoints

use crate::http::{BinanceClient, Endpoint, QueryParams, Result};
use crate::types::{AccountTrade, HistoricalTrade, Order, Table};

impl BinanceClient {
    /// Older market trades, starting at `from_id` when given
    ///
    /// Sends the API key header but no signature. Binance returns the 500
    /// most recent trades when neither `limit` nor `from_id` is set.
    ///
    /// GET /api/v3/historicalTrades?symbol={symbol}&limit={limit}&fromId={from_id}
    pub fn get_historical_trade(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
    ) -> Result<Table<HistoricalTrade>> {
        let params = QueryParams::new()
            .with("symbol", symbol)
            .with_opt("limit", limit)
            .with_opt("fromId", from_id);
        self.keyed_get(Endpoint::HistoricalTrade, params)
    }

    /// Status of one order
    ///
    /// GET /api/v3/order?symbol={symbol}&orderId={order_id}&timestamp=..&signature=..
    pub fn get_query_order(&self, symbol: &str, order_id: u64) -> Result<Order> {
        let params = QueryParams::new()
            .with("symbol", symbol)
            .with("orderId", order_id);
        self.signed_get(Endpoint::Order, params)
    }

    /// Open orders on one symbol, or on every symbol when `symbol` is `None`
    ///
    /// GET /api/v3/openOrders[?symbol={symbol}]&timestamp=..&signature=..
    pub fn get_open_order(&self, symbol: Option<&str>) -> Result<Table<Order>> {
        let params = QueryParams::new().with_opt("symbol", symbol);
        self.signed_get(Endpoint::OpenOrder, params)
    }

    /// All orders for a symbol: active, canceled and filled
    ///
    /// With `order_id`, returns orders with an id >= `order_id`; otherwise the
    /// most recent ones.
    ///
    /// GET /api/v3/allOrders?symbol={symbol}&orderId={order_id}&limit={limit}&timestamp=..&signature=..
    pub fn get_all_order(
        &self,
        symbol: &str,
        order_id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Table<Order>> {
        let params = QueryParams::new()
            .with("symbol", symbol)
            .with_opt("orderId", order_id)
            .with_opt("limit", limit);
        self.signed_get(Endpoint::AllOrder, params)
    }

    /// Fills on this account for a symbol
    ///
    /// GET /api/v3/myTrades?symbol={symbol}&limit={limit}&fromId={from_id}&timestamp=..&signature=..
    pub fn get_my_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
    ) -> Result<Table<AccountTrade>> {
        let params = QueryParams::new()
            .with("symbol", symbol)
            .with_opt("limit", limit)
            .with_opt("fromId", from_id);
        self.signed_get(Endpoint::MyTrade, params)
    }
}
