/*
[INPUT]:  API key pair from the environment and order parameters
[OUTPUT]: Signed payload preview and exchange responses
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use p2pb2b_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Trading operations (requires API key + HMAC signature)
///
/// Set P2PB2B_API_KEY and P2PB2B_API_SECRET to send real requests.
#[tokio::main]
async fn main() {
    println!("=== P2PB2B Trading Example ===\n");

    let api_key = std::env::var("P2PB2B_API_KEY").unwrap_or_default();
    let api_secret = std::env::var("P2PB2B_API_SECRET").unwrap_or_default();

    let order = NewOrderRequest {
        market: "ETH_BTC".to_string(),
        side: Side::Buy,
        amount: Decimal::from_str("0.1").unwrap_or_default(),
        price: Decimal::from_str("0.02").unwrap_or_default(),
    };

    // Show what goes on the wire for a fixed nonce
    let credentials = Credentials::new(api_key.clone(), &api_secret);
    match credentials.signer().sign_request(
        &Endpoint::NewOrder.request_path(),
        Some(&order),
        FixedNonce(1_700_000_000).nonce(),
    ) {
        Ok(signed) => {
            println!("Body:      {}", signed.body);
            println!("Payload:   {}", signed.payload);
            println!("Signature: {}", signed.signature);
        }
        Err(e) => eprintln!("Failed to sign: {}", e),
    }

    if api_key.is_empty() || api_secret.is_empty() {
        println!("\nNo credentials in the environment; skipping live requests");
        return;
    }

    let client = match P2pb2bClient::new(api_key, api_secret) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("\nQuerying balances...");
    match client.get_balances().await {
        Ok(balances) => println!("✓ Balances: {}", balances),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nPlacing order...");
    match client
        .new_order(&order.market, order.side, order.amount, order.price)
        .await
    {
        Ok(response) => println!("✓ Response: {}", response),
        Err(e) => println!("✗ Error: {}", e),
    }
}
