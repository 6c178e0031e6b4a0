/*
[INPUT]:  Symbol identifiers, kline intervals and optional symbol filters
[OUTPUT]: Market data tables (klines, latest prices, 24h tickers)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BinanceClient, Endpoint, QueryParams, Result};
use crate::types::{Interval, Kline, OneOrMany, PriceTicker, Table, Ticker24hr};

impl BinanceClient {
    /// Candlesticks for a symbol, one row per candle
    ///
    /// GET /api/v1/klines?symbol={symbol}&interval={interval}
    pub fn get_klines(&self, symbol: &str, interval: Interval) -> Result<Table<Kline>> {
        let params = QueryParams::new()
            .with("symbol", symbol)
            .with("interval", interval.as_str());
        self.public_get(Endpoint::Klines, params)
    }

    /// Latest price for one symbol, or for every symbol when `symbol` is `None`
    ///
    /// GET /api/v3/ticker/price[?symbol={symbol}]
    pub fn get_price(&self, symbol: Option<&str>) -> Result<Table<PriceTicker>> {
        let params = QueryParams::new().with_opt("symbol", symbol);
        let prices: OneOrMany<PriceTicker> = self.public_get(Endpoint::PriceTicker, params)?;
        Ok(prices.into())
    }

    /// 24 hour rolling statistics for one symbol, or for every symbol
    ///
    /// GET /api/v3/ticker/24hr[?symbol={symbol}]
    pub fn get_24hr_ticker(&self, symbol: Option<&str>) -> Result<Table<Ticker24hr>> {
        let params = QueryParams::new().with_opt("symbol", symbol);
        let tickers: OneOrMany<Ticker24hr> = self.public_get(Endpoint::Ticker24hr, params)?;
        Ok(tickers.into())
    }
}
