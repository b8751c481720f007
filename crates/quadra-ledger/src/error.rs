//! Error types for quadra-ledger.
//!
//! These are precondition violations. Requests that are well-formed but
//! cannot be afforded or drawn are not errors; they come back as
//! [`Rejection`](crate::Rejection) values.

use thiserror::Error;

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Malformed input to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A ballot needs at least one candidate.
    #[error("ballot has no candidates")]
    NoCandidates,

    /// Candidate index is outside `[0, count)`.
    #[error("candidate index {index} out of range for {count} candidates")]
    CandidateOutOfRange { index: i64, count: usize },

    /// Weights are vote counts and cannot be negative.
    #[error("negative weight {weight} requested for candidate {candidate}")]
    NegativeWeight { candidate: usize, weight: i64 },

    /// Weight does not fit the ledger's weight type.
    #[error("weight {weight} requested for candidate {candidate} is too large")]
    WeightTooLarge { candidate: usize, weight: i64 },
}
