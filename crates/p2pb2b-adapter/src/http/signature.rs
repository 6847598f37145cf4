/*
[INPUT]:  Endpoint request path, caller data fields, nonce and secret key
[OUTPUT]: Compact JSON body, base64 payload and HMAC-SHA512 hex signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::{Map, Value};
use sha2::Sha512;

use crate::http::{P2pb2bError, Result};

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the public API key
pub const HEADER_API_KEY: &str = "X-TXC-APIKEY";
/// Header carrying the base64 payload
pub const HEADER_PAYLOAD: &str = "X-TXC-PAYLOAD";
/// Header carrying the hex signature
pub const HEADER_SIGNATURE: &str = "X-TXC-SIGNATURE";

/// Everything a signed POST needs besides the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// Compact JSON body, sent as the request body
    pub body: String,
    /// Base64 of `body`, sent in `X-TXC-PAYLOAD`
    pub payload: String,
    /// Lowercase hex HMAC-SHA512 of `payload`, sent in `X-TXC-SIGNATURE`
    pub signature: String,
}

/// Signs request bodies with the account secret
#[derive(Clone, Copy)]
pub struct RequestSigner<'a> {
    secret: &'a [u8],
}

impl<'a> RequestSigner<'a> {
    pub fn new(secret: &'a [u8]) -> Self {
        Self { secret }
    }

    /// HMAC-SHA512 over the payload text, lowercase hex
    pub fn sign(&self, payload: &str) -> Result<String> {
        let mut mac = HmacSha512::new_from_slice(self.secret)
            .map_err(|err| P2pb2bError::Signing(err.to_string()))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Build and sign the body for `request` (e.g. `/api/v1/order/new`)
    ///
    /// body -> base64 payload -> HMAC-SHA512(secret, payload) -> hex
    pub fn sign_request<T>(&self, request: &str, data: Option<&T>, nonce: u64) -> Result<SignedPayload>
    where
        T: Serialize + ?Sized,
    {
        let body = signed_body(request, data, nonce)?;
        let payload = BASE64.encode(body.as_bytes());
        let signature = self.sign(&payload)?;

        Ok(SignedPayload {
            body,
            payload,
            signature,
        })
    }
}

impl fmt::Debug for RequestSigner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

/// Compact JSON body: caller fields in order, then `request`, then `nonce`.
///
/// A caller field named `request` or `nonce` keeps its position and is
/// overwritten with the reserved value.
///
/// Non-ASCII characters are written as raw UTF-8, not `\uXXXX` escapes.
pub fn signed_body<T>(request: &str, data: Option<&T>, nonce: u64) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut fields = match data {
        None => Map::new(),
        Some(data) => match serde_json::to_value(data).map_err(P2pb2bError::Serialization)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(P2pb2bError::Serialization(serde_json::Error::custom(
                    format!("signed request data must be a JSON object, got {other}"),
                )));
            }
        },
    };

    fields.insert("request".to_string(), Value::String(request.to_string()));
    fields.insert("nonce".to_string(), Value::String(nonce.to_string()));

    serde_json::to_string(&fields).map_err(P2pb2bError::Serialization)
}
