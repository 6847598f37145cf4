/*
[INPUT]:  Currency, order id and pagination parameters
[OUTPUT]: Account data (balances, order deals, order history)
[POS]:    HTTP layer - account endpoints (require API key + HMAC signature)
[UPDATE]: When adding new account endpoints or changing request fields
*/

// ### Account Endpoints

use serde_json::Value;

use crate::http::{P2pb2bClient, Result};
use crate::types::{
    BalanceRequest, DEFAULT_LIMIT, DEFAULT_OFFSET, Endpoint, OrderHistoryRequest, OrderRequest,
};

impl P2pb2bClient {
    /// Balances for every currency
    ///
    /// POST /api/v1/account/balances
    pub async fn get_balances(&self) -> Result<Value> {
        self.post_request::<()>(Endpoint::Balances, None).await
    }

    /// POST /api/v1/account/balance
    pub async fn get_balance(&self, currency: &str) -> Result<Value> {
        let req = BalanceRequest {
            currency: currency.to_string(),
        };
        self.post_request(Endpoint::Balance, Some(&req)).await
    }

    /// Deals of a single order
    ///
    /// POST /api/v1/account/order
    pub async fn get_order(
        &self,
        order_id: i64,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        let req = OrderRequest {
            order_id,
            offset: offset.unwrap_or(DEFAULT_OFFSET),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };
        self.post_request(Endpoint::Order, Some(&req)).await
    }

    /// POST /api/v1/account/order_history
    pub async fn get_order_history(&self, offset: Option<u32>, limit: Option<u32>) -> Result<Value> {
        let req = OrderHistoryRequest {
            offset: offset.unwrap_or(DEFAULT_OFFSET),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };
        self.post_request(Endpoint::OrderHistory, Some(&req)).await
    }
}
