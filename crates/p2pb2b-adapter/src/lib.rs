/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public P2PB2B adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, FixedNonce, NonceSource, SystemClock};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    P2pb2bClient,
    P2pb2bError,
    RequestSigner,
    Result,
    SignedPayload,
};

// Re-export all types
pub use types::*;
