/*
[INPUT]:  HTTP configuration (base URL, timeouts), credentials, nonce source
[OUTPUT]: Configured reqwest client with GET and signed POST primitives
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::auth::{Credentials, NonceSource, SystemClock};
use crate::http::signature::{HEADER_API_KEY, HEADER_PAYLOAD, HEADER_SIGNATURE};
use crate::http::{P2pb2bError, Result};
use crate::types::{API_V1_PREFIX, Endpoint};

/// Base URL for the P2PB2B API
pub const DEFAULT_BASE_URL: &str = "https://p2pb2b.io";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Main HTTP client for the P2PB2B API
///
/// Holds only read-only state, so it can be cloned or shared across tasks.
#[derive(Debug, Clone)]
pub struct P2pb2bClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    nonce_source: Arc<dyn NonceSource>,
}

impl P2pb2bClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<str>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), Credentials::new(api_key, api_secret))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let base_url = config.base_url.clone();
        Self::with_config_and_base_url(config, credentials, &base_url)
    }

    /// Create a new client against a different host (mirrors, mock servers)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        credentials: Credentials,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| P2pb2bError::Config(format!("failed to build http client: {err}")))?;

        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(P2pb2bError::Config(format!(
                "base url cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            credentials,
            nonce_source: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used for request nonces
    pub fn with_nonce_source(mut self, nonce_source: impl NonceSource + 'static) -> Self {
        self.nonce_source = Arc::new(nonce_source);
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint: base + `/api/v1` + path
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{API_V1_PREFIX}{}", endpoint.path()))?)
    }

    /// Unauthenticated GET with optional query parameters
    ///
    /// Returns the parsed body whatever the HTTP status.
    pub async fn get_request<Q>(&self, endpoint: Endpoint, query: Option<&Q>) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        ensure_method(endpoint, Method::GET)?;
        let url = self.endpoint_url(endpoint)?;
        debug!(method = "GET", endpoint = %endpoint, "sending public request");

        let mut builder = self.http_client.get(url);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.send_json(builder).await
    }

    /// Signed POST
    ///
    /// Body is the compact JSON of `data` followed by `request` and `nonce`;
    /// headers carry the API key, the base64 payload and its signature.
    pub async fn post_request<T>(&self, endpoint: Endpoint, data: Option<&T>) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        ensure_method(endpoint, Method::POST)?;
        let url = self.endpoint_url(endpoint)?;
        let nonce = self.nonce_source.nonce();
        let signed = self
            .credentials
            .signer()
            .sign_request(&endpoint.request_path(), data, nonce)?;

        debug!(method = "POST", endpoint = %endpoint, nonce, "sending signed request");

        let builder = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(HEADER_API_KEY, self.credentials.api_key())
            .header(HEADER_PAYLOAD, signed.payload)
            .header(HEADER_SIGNATURE, signed.signature)
            .body(signed.body);
        self.send_json(builder).await
    }

    /// Send a request and decode the body as JSON.
    ///
    /// Status codes are not inspected: exchange error bodies pass through.
    /// A request that cannot be assembled (e.g. an API key that is not a
    /// valid header value) fails before anything is sent.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build().map_err(P2pb2bError::InvalidRequest)?;
        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        trace!(status = status.as_u16(), bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(P2pb2bError::Deserialization)
    }
}

/// Public endpoints are GET only, signed endpoints are POST only
fn ensure_method(endpoint: Endpoint, method: Method) -> Result<()> {
    if endpoint.method() != method {
        return Err(P2pb2bError::Config(format!(
            "{endpoint} is a {} endpoint, not {method}",
            endpoint.method()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedNonce;

    fn credentials() -> Credentials {
        Credentials::new("public-key", "s")
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://p2pb2b.io");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_endpoint_url() {
        let client = P2pb2bClient::new("public-key", "s").unwrap();
        assert_eq!(
            client.endpoint_url(Endpoint::HistoryResult).unwrap().as_str(),
            "https://p2pb2b.io/api/v1/public/history/result"
        );
        assert_eq!(
            client.endpoint_url(Endpoint::NewOrder).unwrap().as_str(),
            "https://p2pb2b.io/api/v1/order/new"
        );
    }

    #[test]
    fn test_base_url_keeps_path_and_ignores_trailing_slash() {
        let client = P2pb2bClient::with_config_and_base_url(
            ClientConfig::default(),
            credentials(),
            "http://localhost:8080/mirror/",
        )
        .unwrap();

        assert_eq!(
            client.endpoint_url(Endpoint::Markets).unwrap().as_str(),
            "http://localhost:8080/mirror/api/v1/public/markets"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = P2pb2bClient::with_config_and_base_url(
            ClientConfig::default(),
            credentials(),
            "not a url",
        )
        .unwrap_err();
        assert!(matches!(err, P2pb2bError::UrlParse(_)));

        let err = P2pb2bClient::with_config_and_base_url(
            ClientConfig::default(),
            credentials(),
            "mailto:desk@example.com",
        )
        .unwrap_err();
        assert!(matches!(err, P2pb2bError::Config(_)));
    }

    #[test]
    fn test_endpoint_verbs_are_enforced() {
        assert!(ensure_method(Endpoint::Markets, Method::GET).is_ok());
        assert!(ensure_method(Endpoint::Balances, Method::POST).is_ok());

        let err = ensure_method(Endpoint::NewOrder, Method::GET).unwrap_err();
        assert!(matches!(err, P2pb2bError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: new_order is a POST endpoint, not GET"
        );
        assert!(ensure_method(Endpoint::Ticker, Method::POST).is_err());
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<P2pb2bClient>();

        let client = P2pb2bClient::new("public-key", "s")
            .unwrap()
            .with_nonce_source(FixedNonce(1));
        assert_eq!(client.credentials().api_key(), "public-key");
        assert_eq!(client.base_url().as_str(), "https://p2pb2b.io/");
    }
}
