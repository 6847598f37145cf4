/*
[INPUT]:  Order parameters and signed request headers
[OUTPUT]: Order placement, cancellation and open order listings
[POS]:    HTTP layer - trading endpoints (require API key + HMAC signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{P2pb2bClient, Result};
use crate::types::{
    CancelOrderRequest, DEFAULT_LIMIT, DEFAULT_OFFSET, Endpoint, NewOrderRequest, OrdersRequest,
    Side,
};

impl P2pb2bClient {
    /// Place a limit order
    ///
    /// POST /api/v1/order/new
    pub async fn new_order(
        &self,
        market: &str,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Value> {
        let req = NewOrderRequest {
            market: market.to_string(),
            side,
            amount,
            price,
        };
        self.post_request(Endpoint::NewOrder, Some(&req)).await
    }

    /// Cancel an existing order
    ///
    /// POST /api/v1/order/cancel
    pub async fn cancel_order(&self, market: &str, order_id: i64) -> Result<Value> {
        let req = CancelOrderRequest {
            market: market.to_string(),
            order_id,
        };
        self.post_request(Endpoint::CancelOrder, Some(&req)).await
    }

    /// Open orders in a market
    ///
    /// POST /api/v1/orders
    pub async fn get_orders(
        &self,
        market: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        let req = OrdersRequest {
            market: market.to_string(),
            offset: offset.unwrap_or(DEFAULT_OFFSET),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };
        self.post_request(Endpoint::Orders, Some(&req)).await
    }
}
