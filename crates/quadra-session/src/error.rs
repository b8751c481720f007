//! Error types for quadra-session.

use quadra_ledger::LedgerError;
use thiserror::Error;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while running a voting session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The ballot rejected malformed input
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Every candidate was excluded before voting started
    #[error("no candidates left to vote on")]
    NoCandidates,

    /// Candidate name is not in the catalog
    #[error("unknown candidate: {0}")]
    UnknownCandidate(String),

    /// Candidate name appears twice in the catalog
    #[error("duplicate candidate: {0}")]
    DuplicateCandidate(String),

    /// The session was already finished
    #[error("session already finished")]
    Finished,

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
