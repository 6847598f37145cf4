/*
[INPUT]:  API key pair and wall-clock time
[OUTPUT]: Credentials and nonce sources for signed requests
[POS]:    Auth layer - key material and replay protection
[UPDATE]: When adding new credential sources or nonce strategies
*/

pub mod credentials;
pub mod nonce;

pub use credentials::Credentials;
pub use nonce::{FixedNonce, NonceSource, SystemClock};
