/*
[INPUT]:  Parsed CLI subcommand and configured client
[OUTPUT]: Raw JSON response of the matching REST operation
[POS]:    Command layer - maps subcommands onto client operations
[UPDATE]: When the client gains or loses an operation
*/

use clap::Subcommand;
use p2pb2b_adapter::{Endpoint, P2pb2bClient, Result, Side};
use rust_decimal::Decimal;
use serde_json::Value;

/// One subcommand per REST operation
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List all markets
    Markets,
    /// Tickers for every market
    Tickers,
    /// Ticker for one market
    Ticker {
        #[arg(long)]
        market: String,
    },
    /// One side of the order book
    Book {
        #[arg(long)]
        market: String,
        #[arg(long)]
        side: Side,
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Trade history after a trade id
    History {
        #[arg(long)]
        market: String,
        #[arg(long)]
        last_id: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Trade history since a timestamp
    HistoryResult {
        #[arg(long)]
        market: String,
        #[arg(long)]
        since: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
    Products,
    Symbols,
    /// Aggregated order book depth
    Depth {
        #[arg(long)]
        market: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Place a limit order
    NewOrder {
        #[arg(long)]
        market: String,
        #[arg(long)]
        side: Side,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        price: Decimal,
    },
    CancelOrder {
        #[arg(long)]
        market: String,
        #[arg(long)]
        order_id: i64,
    },
    /// Open orders in a market
    Orders {
        #[arg(long)]
        market: String,
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Balances,
    Balance {
        #[arg(long)]
        currency: String,
    },
    /// Deals of one order
    Order {
        #[arg(long)]
        order_id: i64,
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    OrderHistory {
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

impl Command {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Command::Markets => Endpoint::Markets,
            Command::Tickers => Endpoint::Tickers,
            Command::Ticker { .. } => Endpoint::Ticker,
            Command::Book { .. } => Endpoint::Book,
            Command::History { .. } => Endpoint::History,
            Command::HistoryResult { .. } => Endpoint::HistoryResult,
            Command::Products => Endpoint::Products,
            Command::Symbols => Endpoint::Symbols,
            Command::Depth { .. } => Endpoint::Depth,
            Command::NewOrder { .. } => Endpoint::NewOrder,
            Command::CancelOrder { .. } => Endpoint::CancelOrder,
            Command::Orders { .. } => Endpoint::Orders,
            Command::Balances => Endpoint::Balances,
            Command::Balance { .. } => Endpoint::Balance,
            Command::Order { .. } => Endpoint::Order,
            Command::OrderHistory { .. } => Endpoint::OrderHistory,
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.endpoint().requires_auth()
    }

    /// Issue the request and return the response body untouched
    pub async fn run(&self, client: &P2pb2bClient) -> Result<Value> {
        match self {
            Command::Markets => client.get_markets().await,
            Command::Tickers => client.get_tickers().await,
            Command::Ticker { market } => client.get_ticker(market).await,
            Command::Book {
                market,
                side,
                offset,
                limit,
            } => client.get_book(market, *side, *offset, *limit).await,
            Command::History {
                market,
                last_id,
                limit,
            } => client.get_history(market, *last_id, *limit).await,
            Command::HistoryResult {
                market,
                since,
                limit,
            } => client.get_history_result(market, *since, *limit).await,
            Command::Products => client.get_products().await,
            Command::Symbols => client.get_symbols().await,
            Command::Depth { market, limit } => client.get_depth(market, *limit).await,
            Command::NewOrder {
                market,
                side,
                amount,
                price,
            } => client.new_order(market, *side, *amount, *price).await,
            Command::CancelOrder { market, order_id } => {
                client.cancel_order(market, *order_id).await
            }
            Command::Orders {
                market,
                offset,
                limit,
            } => client.get_orders(market, *offset, *limit).await,
            Command::Balances => client.get_balances().await,
            Command::Balance { currency } => client.get_balance(currency).await,
            Command::Order {
                order_id,
                offset,
                limit,
            } => client.get_order(*order_id, *offset, *limit).await,
            Command::OrderHistory { offset, limit } => {
                client.get_order_history(*offset, *limit).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use p2pb2b_adapter::{ClientConfig, Credentials, FixedNonce};
    use serde_json::json;
    use tokio_test::assert_ok;
    use wiremock::matchers::{body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        let argv = std::iter::once("p2pb2b").chain(args.iter().copied());
        Harness::try_parse_from(argv).expect("parse args").command
    }

    #[test]
    fn test_parse_book() {
        let command = parse(&["book", "--market", "ETH_BTC", "--side", "buy", "--limit", "5"]);
        assert_eq!(
            command,
            Command::Book {
                market: "ETH_BTC".to_string(),
                side: Side::Buy,
                offset: None,
                limit: Some(5),
            }
        );
        assert!(!command.requires_auth());
    }

    #[test]
    fn test_parse_new_order() {
        let command = parse(&[
            "new-order", "--market", "ETH_BTC", "--side", "sell", "--amount", "0.1", "--price",
            "0.02",
        ]);
        assert_eq!(command.endpoint(), Endpoint::NewOrder);
        assert!(command.requires_auth());
    }

    #[test]
    fn test_rejects_unknown_side() {
        let argv = ["p2pb2b", "book", "--market", "ETH_BTC", "--side", "hold"];
        assert!(Harness::try_parse_from(argv).is_err());
    }

    #[tokio::test]
    async fn test_run_public_and_private_commands() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/public/depth/result"))
            .and(query_param("market", "ETH_BTC"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"asks": []})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/account/balance"))
            .and(body_string(
                r#"{"currency":"BTC","request":"/api/v1/account/balance","nonce":"1700000000"}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = P2pb2bClient::with_config_and_base_url(
            ClientConfig::default(),
            Credentials::new("key", "secret"),
            &server.uri(),
        )
        .expect("client init")
        .with_nonce_source(FixedNonce(1_700_000_000));

        let depth = assert_ok!(parse(&["depth", "--market", "ETH_BTC"]).run(&client).await);
        assert_eq!(depth, json!({"asks": []}));

        let balance = assert_ok!(parse(&["balance", "--currency", "BTC"]).run(&client).await);
        assert_eq!(balance["success"], true);
    }
}
