//! The BingoVSS protocol state machine: Dealer, Verifier, and reconstruction
//! (`spec.md` §4.4-§4.6).

pub mod dealer;
pub mod messages;
pub mod reconstruct;
pub mod verifier;

pub use dealer::{DealOutput, Dealer};
pub use messages::Message;
pub use reconstruct::reconstruct;
pub use verifier::{Verifier, VerifierStatus};

use crate::error::{BingoError, Result};

/// `n = 3f+1, d2 = f, d1 = 2f+1` (`spec.md` §4.4's thresholds paragraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    pub f: usize,
    pub n: usize,
    pub d1: usize,
    pub d2: usize,
}

impl ThresholdConfig {
    /// Derive `n`, `d1`, `d2` from the Byzantine fault bound `f`.
    pub fn new(f: usize) -> Self {
        ThresholdConfig {
            f,
            n: 3 * f + 1,
            d1: 2 * f + 1,
            d2: f,
        }
    }

    /// Validate an externally-supplied `(n, d1, d2)` triple against `f`.
    pub fn from_degrees(f: usize, n: usize, d1: usize, d2: usize) -> Result<Self> {
        let expected = ThresholdConfig::new(f);
        if n != expected.n {
            return Err(BingoError::InconsistentDegrees {
                expected: expected.n,
                got: n,
            });
        }
        if d1 != expected.d1 {
            return Err(BingoError::InconsistentDegrees {
                expected: expected.d1,
                got: d1,
            });
        }
        if d2 != expected.d2 {
            return Err(BingoError::InconsistentDegrees {
                expected: expected.d2,
                got: d2,
            });
        }
        Ok(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_config_matches_spec_formula() {
        let t = ThresholdConfig::new(2);
        assert_eq!(t.n, 7);
        assert_eq!(t.d1, 5);
        assert_eq!(t.d2, 2);
    }

    #[test]
    fn from_degrees_rejects_mismatch() {
        assert!(ThresholdConfig::from_degrees(2, 8, 5, 2).is_err());
    }
}
