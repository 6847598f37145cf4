/*
[INPUT]:  Error sources (transport, JSON decoding, signing, configuration)
[OUTPUT]: Structured error types that keep transport and decode failures apart
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the P2PB2B adapter
///
/// Error bodies returned by the exchange are not errors here: they are valid
/// JSON and reach the caller unchanged.
#[derive(Error, Debug)]
pub enum P2pb2bError {
    /// HTTP transport failed (connect, DNS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request could not be assembled; nothing was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] reqwest::Error),

    /// Response body is not valid JSON
    #[error("Failed to decode response body: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// Request data could not be encoded
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// HMAC could not be initialized
    #[error("Request signing failed: {0}")]
    Signing(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl P2pb2bError {
    /// Check if the request never produced a readable response
    pub fn is_transport(&self) -> bool {
        matches!(self, P2pb2bError::Http(_))
    }

    /// Check if the transport gave up on a timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            P2pb2bError::Http(err) => err.is_timeout(),
            _ => false,
        }
    }

    /// Check if a response arrived but could not be parsed
    pub fn is_deserialization(&self) -> bool {
        matches!(self, P2pb2bError::Deserialization(_))
    }
}

/// Result type alias for P2PB2B operations
pub type Result<T> = std::result::Result<T, P2pb2bError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("<html>").unwrap_err()
    }

    #[test]
    fn test_error_categories_are_distinct() {
        let decode_err = P2pb2bError::Deserialization(json_error());
        assert!(decode_err.is_deserialization());
        assert!(!decode_err.is_transport());
        assert!(!decode_err.is_timeout());

        let builder_err = reqwest::Client::new()
            .get("http://localhost/")
            .header("X-TXC-APIKEY", "bad\nkey")
            .build()
            .unwrap_err();
        let invalid_err = P2pb2bError::InvalidRequest(builder_err);
        assert!(!invalid_err.is_transport());
        assert!(!invalid_err.is_timeout());
        assert!(!invalid_err.is_deserialization());

        let config_err = P2pb2bError::Config("missing api key".to_string());
        assert!(!config_err.is_transport());
        assert!(!config_err.is_deserialization());
    }

    #[test]
    fn test_error_messages() {
        let err = P2pb2bError::Config("missing api key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing api key");

        let err = P2pb2bError::Deserialization(json_error());
        assert!(err.to_string().starts_with("Failed to decode response body"));
    }
}
