/*
[INPUT]:  Exchange REST API route table
[OUTPUT]: Static endpoint descriptors (path, verb, auth requirement)
[POS]:    Data layer - operation routing
[UPDATE]: When the exchange adds, moves or removes an endpoint
*/

use std::fmt;

use reqwest::Method;

/// Versioned API root prepended to every endpoint path
pub const API_V1_PREFIX: &str = "/api/v1";

/// Every REST operation exposed by the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Markets,
    Tickers,
    Ticker,
    Book,
    History,
    HistoryResult,
    Products,
    Symbols,
    Depth,
    NewOrder,
    CancelOrder,
    Orders,
    Balances,
    Balance,
    Order,
    OrderHistory,
}

impl Endpoint {
    pub const ALL: [Endpoint; 16] = [
        Endpoint::Markets,
        Endpoint::Tickers,
        Endpoint::Ticker,
        Endpoint::Book,
        Endpoint::History,
        Endpoint::HistoryResult,
        Endpoint::Products,
        Endpoint::Symbols,
        Endpoint::Depth,
        Endpoint::NewOrder,
        Endpoint::CancelOrder,
        Endpoint::Orders,
        Endpoint::Balances,
        Endpoint::Balance,
        Endpoint::Order,
        Endpoint::OrderHistory,
    ];

    /// Logical operation name
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Markets => "markets",
            Endpoint::Tickers => "tickers",
            Endpoint::Ticker => "ticker",
            Endpoint::Book => "book",
            Endpoint::History => "history",
            Endpoint::HistoryResult => "history_result",
            Endpoint::Products => "products",
            Endpoint::Symbols => "symbols",
            Endpoint::Depth => "depth",
            Endpoint::NewOrder => "new_order",
            Endpoint::CancelOrder => "cancel_order",
            Endpoint::Orders => "orders",
            Endpoint::Balances => "balances",
            Endpoint::Balance => "balance",
            Endpoint::Order => "order",
            Endpoint::OrderHistory => "order_history",
        }
    }

    /// Path suffix below [`API_V1_PREFIX`]
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Markets => "/public/markets",
            Endpoint::Tickers => "/public/tickers",
            Endpoint::Ticker => "/public/ticker",
            Endpoint::Book => "/public/book",
            Endpoint::History => "/public/history",
            Endpoint::HistoryResult => "/public/history/result",
            Endpoint::Products => "/public/products",
            Endpoint::Symbols => "/public/symbols",
            Endpoint::Depth => "/public/depth/result",
            Endpoint::NewOrder => "/order/new",
            Endpoint::CancelOrder => "/order/cancel",
            Endpoint::Orders => "/orders",
            Endpoint::Balances => "/account/balances",
            Endpoint::Balance => "/account/balance",
            Endpoint::Order => "/account/order",
            Endpoint::OrderHistory => "/account/order_history",
        }
    }

    /// Signed endpoints are POSTed, public ones are GET
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Endpoint::NewOrder
                | Endpoint::CancelOrder
                | Endpoint::Orders
                | Endpoint::Balances
                | Endpoint::Balance
                | Endpoint::Order
                | Endpoint::OrderHistory
        )
    }

    pub fn method(&self) -> Method {
        if self.requires_auth() {
            Method::POST
        } else {
            Method::GET
        }
    }

    /// Full request path, also used as the `request` field of signed bodies
    ///
    /// e.g. `/api/v1/order/new`
    pub fn request_path(&self) -> String {
        format!("{API_V1_PREFIX}{}", self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(Endpoint::Markets, "/api/v1/public/markets", Method::GET)]
    #[case(Endpoint::HistoryResult, "/api/v1/public/history/result", Method::GET)]
    #[case(Endpoint::Depth, "/api/v1/public/depth/result", Method::GET)]
    #[case(Endpoint::NewOrder, "/api/v1/order/new", Method::POST)]
    #[case(Endpoint::Orders, "/api/v1/orders", Method::POST)]
    #[case(Endpoint::OrderHistory, "/api/v1/account/order_history", Method::POST)]
    fn test_endpoint_routes(
        #[case] endpoint: Endpoint,
        #[case] request_path: &str,
        #[case] method: Method,
    ) {
        assert_eq!(endpoint.request_path(), request_path);
        assert_eq!(endpoint.method(), method);
    }

    #[test]
    fn test_endpoint_table_is_unique() {
        let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        let names: HashSet<_> = Endpoint::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(paths.len(), Endpoint::ALL.len());
        assert_eq!(names.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_public_and_private_split() {
        let public: Vec<_> = Endpoint::ALL.iter().filter(|e| !e.requires_auth()).collect();
        assert_eq!(public.len(), 9);
        assert!(public.iter().all(|e| e.path().starts_with("/public/")));
    }
}
