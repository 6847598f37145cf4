/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for p2pb2b-adapter tests

use p2pb2b_adapter::{ClientConfig, Credentials, P2pb2bClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "4b8c2a9e-public";
pub const TEST_API_SECRET: &str = "s";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> P2pb2bClient {
    client_with_config(server, ClientConfig::default())
}

pub fn client_with_config(server: &MockServer, config: ClientConfig) -> P2pb2bClient {
    P2pb2bClient::with_config_and_base_url(config, test_credentials(), &server.uri())
        .expect("client init")
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}
