/*
[INPUT]:  Public API key and secret key strings
[OUTPUT]: Immutable credential pair used by the request signer
[POS]:    Auth layer - key storage
[UPDATE]: When credential format or loading changes
*/

use std::fmt;

use crate::http::RequestSigner;

/// API key pair issued by the exchange.
///
/// The secret is kept as raw bytes and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: Vec<u8>,
}

impl Credentials {
    /// Create credentials from the public key and secret key strings.
    ///
    /// No format validation is performed; malformed keys are rejected by the server.
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.as_ref().as_bytes().to_vec(),
        }
    }

    /// Public key sent in the `X-TXC-APIKEY` header
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Secret key bytes used as the HMAC key
    pub fn api_secret(&self) -> &[u8] {
        &self.api_secret
    }

    /// Request signer keyed by this secret
    pub fn signer(&self) -> RequestSigner<'_> {
        RequestSigner::new(&self.api_secret)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_stored_as_utf8_bytes() {
        let credentials = Credentials::new("public", "sécret");
        assert_eq!(credentials.api_key(), "public");
        assert_eq!(credentials.api_secret(), "sécret".as_bytes());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("public", "top-secret-value");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("public"));
        assert!(!rendered.contains("top-secret-value"));
    }
}
