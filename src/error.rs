//! Error kinds shared across the polynomial, KZG, and VSS layers.

/// Everything that can go wrong inside the BingoVSS core.
///
/// Division/solver failures are programmer- or adversary-triggered bugs and
/// abort the current call. `VerificationFailed` is tallied by callers rather
/// than propagated; `InsufficientShares` is the terminal error once a
/// threshold cannot be met.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BingoError {
    /// Polynomial division left a non-zero remainder.
    #[error("polynomial division left a non-exact remainder of degree {remainder_degree}")]
    NonExactDivision {
        /// Degree of the non-zero remainder (trimmed).
        remainder_degree: usize,
    },

    /// Two polynomials, or a polynomial and a point set, had incompatible shapes.
    #[error("inconsistent degrees: expected {expected}, got {got}")]
    InconsistentDegrees {
        /// Degree/length required by the operation.
        expected: usize,
        /// Degree/length actually supplied.
        got: usize,
    },

    /// Gaussian elimination hit a zero pivot (duplicate or pathological interpolation points).
    #[error("singular linear system: zero pivot at row {row}")]
    SingularSystem {
        /// Row at which the pivot vanished.
        row: usize,
    },

    /// Fewer than the required threshold of verified proofs/shares were available.
    #[error("insufficient shares: need {needed}, have {available}")]
    InsufficientShares {
        /// Threshold required by the operation.
        needed: usize,
        /// Number of usable (verified) shares actually available.
        available: usize,
    },

    /// A pairing check returned inequality. Not fatal on its own: callers tally
    /// successes and continue with the remaining proofs.
    #[error("evaluation proof failed pairing verification")]
    VerificationFailed,

    /// A proof element failed a group-membership, shape, or deserialization check.
    #[error("malformed proof: {reason}")]
    MalformedProof {
        /// Human-readable description of what was malformed.
        reason: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BingoError>;
