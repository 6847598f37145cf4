/*
[INPUT]:  Market identifiers and pagination parameters
[OUTPUT]: Market data (markets, tickers, order book, trade history, depth)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{P2pb2bClient, Result};
use crate::types::{
    BookQuery, DEFAULT_LIMIT, DEFAULT_OFFSET, DepthQuery, Endpoint, HistoryQuery,
    HistoryResultQuery, Side, TickerQuery,
};

impl P2pb2bClient {
    /// List all markets
    ///
    /// GET /api/v1/public/markets
    pub async fn get_markets(&self) -> Result<Value> {
        self.get_request::<()>(Endpoint::Markets, None).await
    }

    /// Tickers for every market
    ///
    /// GET /api/v1/public/tickers
    pub async fn get_tickers(&self) -> Result<Value> {
        self.get_request::<()>(Endpoint::Tickers, None).await
    }

    /// GET /api/v1/public/ticker?market={market}
    pub async fn get_ticker(&self, market: &str) -> Result<Value> {
        let query = TickerQuery {
            market: market.to_string(),
        };
        self.get_request(Endpoint::Ticker, Some(&query)).await
    }

    /// Order book for one side of a market
    ///
    /// GET /api/v1/public/book?market={market}&side={side}&offset={offset}&limit={limit}
    pub async fn get_book(
        &self,
        market: &str,
        side: Side,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        let query = BookQuery {
            market: market.to_string(),
            side,
            offset: offset.unwrap_or(DEFAULT_OFFSET),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };
        self.get_request(Endpoint::Book, Some(&query)).await
    }

    /// Trade history after `last_id`
    ///
    /// GET /api/v1/public/history?market={market}&last_id={last_id}&limit={limit}
    pub async fn get_history(&self, market: &str, last_id: i64, limit: Option<u32>) -> Result<Value> {
        let query = HistoryQuery {
            market: market.to_string(),
            last_id,
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };
        self.get_request(Endpoint::History, Some(&query)).await
    }

    /// GET /api/v1/public/history/result?market={market}&since={since}&limit={limit}
    pub async fn get_history_result(
        &self,
        market: &str,
        since: i64,
        limit: Option<u32>,
    ) -> Result<Value> {
        let query = HistoryResultQuery {
            market: market.to_string(),
            since,
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };
        self.get_request(Endpoint::HistoryResult, Some(&query)).await
    }

    /// GET /api/v1/public/products
    pub async fn get_products(&self) -> Result<Value> {
        self.get_request::<()>(Endpoint::Products, None).await
    }

    /// GET /api/v1/public/symbols
    pub async fn get_symbols(&self) -> Result<Value> {
        self.get_request::<()>(Endpoint::Symbols, None).await
    }

    /// Aggregated order book depth
    ///
    /// GET /api/v1/public/depth/result?market={market}&limit={limit}
    pub async fn get_depth(&self, market: &str, limit: Option<u32>) -> Result<Value> {
        let query = DepthQuery {
            market: market.to_string(),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };
        self.get_request(Endpoint::Depth, Some(&query)).await
    }
}
