/*
[INPUT]:  Typed records returned by REST endpoints
[OUTPUT]: Column-ordered tables with text and JSON rendering
[POS]:    Data layer - tabular reshaping of responses
[UPDATE]: When record types or their column sets change
*/

use serde::{Deserialize, Serialize};
use std::fmt;

use super::models::{AccountTrade, HistoricalTrade, Kline, Order, PriceTicker, Ticker24hr};
use super::responses::OneOrMany;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A record that can be laid out as one table row
pub trait TableRow {
    /// Column headers, in display order
    const COLUMNS: &'static [&'static str];

    /// Cell values, one per entry in `COLUMNS`
    fn cells(&self) -> Vec<String>;
}

/// Ordered rows of a single record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T: TableRow> Table<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        T::COLUMNS
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// All cell values of the named column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<String>> {
        let index = T::COLUMNS.iter().position(|column| *column == name)?;
        Some(self.rows.iter().map(|row| row.cells().swap_remove(index)).collect())
    }
}

impl<T: TableRow> From<Vec<T>> for Table<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::new(rows)
    }
}

impl<T: TableRow> From<OneOrMany<T>> for Table<T> {
    fn from(value: OneOrMany<T>) -> Self {
        Self::new(value.into_vec())
    }
}

impl<T> IntoIterator for Table<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Right-aligned grid with a leading row index column
impl<T: TableRow> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body: Vec<Vec<String>> = self.rows.iter().map(T::cells).collect();

        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let mut widths: Vec<usize> = T::COLUMNS.iter().map(|column| column.len()).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.len());
            }
        }

        write!(f, "{:index_width$}", "")?;
        for (column, &width) in T::COLUMNS.iter().zip(&widths) {
            write!(f, "  {column:>width$}")?;
        }
        writeln!(f)?;

        for (index, cells) in body.iter().enumerate() {
            write!(f, "{index:>index_width$}")?;
            for (cell, &width) in cells.iter().zip(&widths) {
                write!(f, "  {cell:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl TableRow for Kline {
    const COLUMNS: &'static [&'static str] = &[
        "open time",
        "open",
        "high",
        "low",
        "close",
        "volume",
        "close time",
        "quote asset volume",
        "no. of trades",
        "taker buy base asset volume",
        "taker buy quote asset volume",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.open_time.format(DATETIME_FORMAT).to_string(),
            self.open.to_string(),
            self.high.to_string(),
            self.low.to_string(),
            self.close.to_string(),
            self.volume.to_string(),
            self.close_time.format(DATETIME_FORMAT).to_string(),
            self.quote_asset_volume.to_string(),
            self.number_of_trades.to_string(),
            self.taker_buy_base_asset_volume.to_string(),
            self.taker_buy_quote_asset_volume.to_string(),
        ]
    }
}

impl TableRow for PriceTicker {
    const COLUMNS: &'static [&'static str] = &["symbol", "price"];

    fn cells(&self) -> Vec<String> {
        vec![self.symbol.clone(), self.price.to_string()]
    }
}

impl TableRow for Ticker24hr {
    const COLUMNS: &'static [&'static str] = &[
        "symbol",
        "priceChange",
        "priceChangePercent",
        "weightedAvgPrice",
        "prevClosePrice",
        "lastPrice",
        "lastQty",
        "bidPrice",
        "bidQty",
        "askPrice",
        "askQty",
        "openPrice",
        "highPrice",
        "lowPrice",
        "volume",
        "quoteVolume",
        "openTime",
        "closeTime",
        "firstId",
        "lastId",
        "count",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            self.price_change.to_string(),
            self.price_change_percent.to_string(),
            self.weighted_avg_price.to_string(),
            self.prev_close_price.to_string(),
            self.last_price.to_string(),
            self.last_qty.to_string(),
            self.bid_price.to_string(),
            self.bid_qty.to_string(),
            self.ask_price.to_string(),
            self.ask_qty.to_string(),
            self.open_price.to_string(),
            self.high_price.to_string(),
            self.low_price.to_string(),
            self.volume.to_string(),
            self.quote_volume.to_string(),
            self.open_time.to_string(),
            self.close_time.to_string(),
            self.first_id.to_string(),
            self.last_id.to_string(),
            self.count.to_string(),
        ]
    }
}

impl TableRow for HistoricalTrade {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "price",
        "qty",
        "quoteQty",
        "time",
        "isBuyerMaker",
        "isBestMatch",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.price.to_string(),
            self.qty.to_string(),
            self.quote_qty.to_string(),
            self.time.to_string(),
            self.is_buyer_maker.to_string(),
            self.is_best_match.to_string(),
        ]
    }
}

impl TableRow for Order {
    const COLUMNS: &'static [&'static str] = &[
        "symbol",
        "orderId",
        "orderListId",
        "clientOrderId",
        "price",
        "origQty",
        "executedQty",
        "cummulativeQuoteQty",
        "status",
        "timeInForce",
        "type",
        "side",
        "stopPrice",
        "icebergQty",
        "time",
        "updateTime",
        "isWorking",
        "origQuoteOrderQty",
        "workingTime",
        "selfTradePreventionMode",
        "preventedMatchId",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            self.order_id.to_string(),
            self.order_list_id.to_string(),
            self.client_order_id.clone(),
            self.price.to_string(),
            self.orig_qty.to_string(),
            self.executed_qty.to_string(),
            self.cummulative_quote_qty.to_string(),
            self.status.to_string(),
            self.time_in_force.to_string(),
            self.order_type.to_string(),
            self.side.to_string(),
            self.stop_price.to_string(),
            self.iceberg_qty.to_string(),
            self.time.to_string(),
            self.update_time.to_string(),
            self.is_working.to_string(),
            self.orig_quote_order_qty.to_string(),
            optional_cell(self.working_time),
            optional_cell(self.self_trade_prevention_mode.as_deref()),
            optional_cell(self.prevented_match_id),
        ]
    }
}

/// Absent upstream fields render as an empty cell
fn optional_cell<V: ToString>(value: Option<V>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

impl TableRow for AccountTrade {
    const COLUMNS: &'static [&'static str] = &[
        "symbol",
        "id",
        "orderId",
        "orderListId",
        "price",
        "qty",
        "quoteQty",
        "commission",
        "commissionAsset",
        "time",
        "isBuyer",
        "isMaker",
        "isBestMatch",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            self.id.to_string(),
            self.order_id.to_string(),
            self.order_list_id.to_string(),
            self.price.to_string(),
            self.qty.to_string(),
            self.quote_qty.to_string(),
            self.commission.to_string(),
            self.commission_asset.clone(),
            self.time.to_string(),
            self.is_buyer.to_string(),
            self.is_maker.to_string(),
            self.is_best_match.to_string(),
        ]
    }
}
