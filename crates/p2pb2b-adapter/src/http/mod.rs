/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses as pass-through JSON
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;

pub use error::{P2pb2bError, Result};
pub use signature::{RequestSigner, SignedPayload};

pub use client::{ClientConfig, P2pb2bClient};
