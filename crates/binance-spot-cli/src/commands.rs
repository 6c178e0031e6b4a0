/*
[INPUT]:  Parsed subcommand and a configured client
[OUTPUT]: Rendered query result
[POS]:    Command layer - maps subcommands onto client calls
[UPDATE]: When the adapter gains or changes an endpoint
*/

use anyhow::Context;
use binance_spot_adapter::{BinanceClient, Interval};
use clap::Subcommand;

use crate::output::{OutputFormat, render_record, render_table};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Candlesticks for a symbol
    Klines {
        #[arg(long)]
        symbol: String,
        /// Interval code, e.g. 1m, 4h, 1d, 1M
        #[arg(long)]
        interval: Interval,
    },
    /// Latest price for one symbol, or all symbols
    Price {
        #[arg(long)]
        symbol: Option<String>,
    },
    /// 24 hour rolling statistics for one symbol, or all symbols
    Ticker {
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Older market trades (API key required)
    Trades {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        from_id: Option<u64>,
    },
    /// Status of one order (signed)
    Order {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        order_id: u64,
    },
    /// Open orders (signed)
    OpenOrders {
        #[arg(long)]
        symbol: Option<String>,
    },
    /// All orders for a symbol (signed)
    AllOrders {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        order_id: Option<u64>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Fills on this account for a symbol (signed)
    MyTrades {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        from_id: Option<u64>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Klines { .. } => "klines",
            Command::Price { .. } => "price",
            Command::Ticker { .. } => "ticker",
            Command::Trades { .. } => "trades",
            Command::Order { .. } => "order",
            Command::OpenOrders { .. } => "open-orders",
            Command::AllOrders { .. } => "all-orders",
            Command::MyTrades { .. } => "my-trades",
        }
    }

    pub fn requires_credentials(&self) -> bool {
        !matches!(
            self,
            Command::Klines { .. } | Command::Price { .. } | Command::Ticker { .. }
        )
    }

    pub fn run(&self, client: &BinanceClient, format: OutputFormat) -> anyhow::Result<String> {
        match self {
            Command::Klines { symbol, interval } => {
                let table = client
                    .get_klines(symbol, *interval)
                    .with_context(|| format!("klines {symbol} {interval}"))?;
                render_table(&table, format)
            }
            Command::Price { symbol } => {
                let table = client.get_price(symbol.as_deref()).context("price")?;
                render_table(&table, format)
            }
            Command::Ticker { symbol } => {
                let table = client.get_24hr_ticker(symbol.as_deref()).context("24hr ticker")?;
                render_table(&table, format)
            }
            Command::Trades {
                symbol,
                limit,
                from_id,
            } => {
                let table = client
                    .get_historical_trade(symbol, *limit, *from_id)
                    .with_context(|| format!("historical trades {symbol}"))?;
                render_table(&table, format)
            }
            Command::Order { symbol, order_id } => {
                let order = client
                    .get_query_order(symbol, *order_id)
                    .with_context(|| format!("order {symbol} #{order_id}"))?;
                render_record(order, format)
            }
            Command::OpenOrders { symbol } => {
                let table = client.get_open_order(symbol.as_deref()).context("open orders")?;
                render_table(&table, format)
            }
            Command::AllOrders {
                symbol,
                order_id,
                limit,
            } => {
                let table = client
                    .get_all_order(symbol, *order_id, *limit)
                    .with_context(|| format!("all orders {symbol}"))?;
                render_table(&table, format)
            }
            Command::MyTrades {
                symbol,
                limit,
                from_id,
            } => {
                let table = client
                    .get_my_trades(symbol, *limit, *from_id)
                    .with_context(|| format!("my trades {symbol}"))?;
                render_table(&table, format)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_market_data_runs_without_credentials() {
        let public = Command::Price { symbol: None };
        let keyed = Command::Trades {
            symbol: "BTCUSDT".to_string(),
            limit: None,
            from_id: None,
        };
        let signed = Command::OpenOrders { symbol: None };

        assert!(!public.requires_credentials());
        assert!(keyed.requires_credentials());
        assert!(signed.requires_credentials());
        assert_eq!(signed.name(), "open-orders");
    }
}
