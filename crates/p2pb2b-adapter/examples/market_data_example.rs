/*
[INPUT]:  Market identifier (e.g., "ETH_BTC")
[OUTPUT]: Market data (ticker, order book, depth)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use p2pb2b_adapter::*;

/// Example: Query market data
///
/// Public endpoints are plain GETs; the keys are never used for them.
#[tokio::main]
async fn main() {
    println!("=== P2PB2B Market Data Example ===\n");

    let client = match P2pb2bClient::new("unused", "unused") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let market = "ETH_BTC";

    println!("Querying ticker for {}...", market);
    match client.get_ticker(market).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying sell side of the book for {}...", market);
    match client.get_book(market, Side::Sell, None, Some(5)).await {
        Ok(book) => println!("✓ Book: {}", book),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying depth for {}...", market);
    match client.get_depth(market, Some(10)).await {
        Ok(depth) => println!("✓ Depth: {}", depth),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
