/*
[INPUT]:  System wall clock (or a fixed value in tests)
[OUTPUT]: Nonce values in whole Unix seconds
[POS]:    Auth layer - replay protection for signed requests
[UPDATE]: When the exchange changes its nonce requirements
*/

use std::fmt;

use chrono::Utc;

/// Source of the `nonce` field included in every signed request body.
pub trait NonceSource: Send + Sync + fmt::Debug {
    /// Current nonce, rendered on the wire as a decimal string
    fn nonce(&self) -> u64;
}

/// Nonce from the system clock, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl NonceSource for SystemClock {
    fn nonce(&self) -> u64 {
        // Clamp pre-epoch clocks instead of wrapping.
        Utc::now().timestamp().max(0) as u64
    }
}

/// Constant nonce. Makes signatures reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNonce(pub u64);

impl NonceSource for FixedNonce {
    fn nonce(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_whole_seconds() {
        let before = Utc::now().timestamp() as u64;
        let nonce = SystemClock.nonce();
        let after = Utc::now().timestamp() as u64;
        assert!(nonce >= before && nonce <= after);
        assert!(!nonce.to_string().contains('.'));
    }

    #[test]
    fn test_fixed_nonce() {
        assert_eq!(FixedNonce(1_700_000_000).nonce(), 1_700_000_000);
    }
}
