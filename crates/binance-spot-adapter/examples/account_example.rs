/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET environment variables
[OUTPUT]: Open orders, order history and recent market trades
[POS]:    Examples - keyed and signed account queries
[UPDATE]: When account API changes
*/

use binance_spot_adapter::*;

/// Example: Account queries (require API key, most require a signature)
///
/// - historicalTrades: `X-MBX-APIKEY` header only
/// - openOrders / allOrders / myTrades: header + `timestamp` + HMAC `signature`
fn main() {
    println!("=== Binance Account Example ===\n");

    let (Ok(api_key), Ok(api_secret)) = (
        std::env::var("BINANCE_API_KEY"),
        std::env::var("BINANCE_API_SECRET"),
    ) else {
        eprintln!("Set BINANCE_API_KEY and BINANCE_API_SECRET to run this example");
        return;
    };

    let client = match BinanceClient::new(api_key, api_secret) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let symbol = "BTCUSDT";

    println!("\nQuerying 5 historical trades for {}...", symbol);
    match client.get_historical_trade(symbol, Some(5), None) {
        Ok(trades) => println!("✓ Trades:\n{}", trades),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying open orders...");
    match client.get_open_order(None) {
        Ok(orders) => println!("✓ {} open orders\n{}", orders.len(), orders),
        Err(e) if e.is_auth_error() => println!("✗ Credentials rejected: {}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying last 10 orders for {}...", symbol);
    match client.get_all_order(symbol, None, Some(10)) {
        Ok(orders) => println!("✓ Orders:\n{}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account example complete");
}
