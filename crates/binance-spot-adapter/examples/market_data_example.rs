/*
[INPUT]:  Symbol identifier (e.g., "BTCUSDT") and kline interval
[OUTPUT]: Market data tables (klines, prices, 24h ticker)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use binance_spot_adapter::*;

/// Example: Query market data (no authentication required)
///
/// Public endpoints ignore the credentials, so empty strings are fine here.
fn main() {
    println!("=== Binance Market Data Example ===\n");

    let client = match BinanceClient::new("", "") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let symbol = "BTCUSDT";

    println!("Querying hourly klines for {}...", symbol);
    match client.get_klines(symbol, Interval::Hour1) {
        Ok(klines) => println!("✓ {} candles\n{}", klines.len(), klines),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying price for {}...", symbol);
    match client.get_price(Some(symbol)) {
        Ok(price) => println!("✓ Price:\n{}", price),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying 24h ticker for {}...", symbol);
    match client.get_24hr_ticker(Some(symbol)) {
        Ok(ticker) => println!("✓ Ticker:\n{}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
