//! Quadra Voting Session
//!
//! Wraps a ballot [`Allocator`](quadra_ledger::Allocator) with the steps
//! around it:
//!
//! - **Selection**: strike candidates from a catalog before voting starts
//! - **Timeline**: every weight-change request is recorded with its outcome
//! - **Handoff**: the finished ballot becomes an in-memory result set
//!
//! Nothing is persisted; a session lives as long as its owner keeps it.
//!
//! # Usage
//!
//! ```
//! use quadra_grid::GridSpec;
//! use quadra_session::CandidatePool;
//!
//! let mut pool = CandidatePool::reference();
//! pool.exclude("Leisure management")?;
//!
//! let mut session = pool.start_session(GridSpec::standard())?;
//! session.increment(0)?;
//! let results = session.finish()?;
//! assert_eq!(results.len(), 9);
//! # Ok::<(), quadra_session::SessionError>(())
//! ```

mod error;
mod events;
mod pool;
mod session;

pub use error::{Result, SessionError};
pub use events::{SessionEvent, SessionSnapshot};
pub use pool::{CandidatePool, REFERENCE_CATALOG};
pub use session::Session;

#[cfg(test)]
mod tests {
    use super::*;
    use quadra_grid::GridSpec;

    #[test]
    fn reference_pool_to_results() {
        let mut session = CandidatePool::reference()
            .start_session(GridSpec::standard())
            .unwrap();

        for _ in 0..3 {
            session.increment(0).unwrap();
        }
        session.increment(4).unwrap();

        let results = session.finish().unwrap();
        assert_eq!(results.len(), REFERENCE_CATALOG.len());
        assert_eq!(results.total_cost(), 10);

        let shares: Vec<u64> = results.shares().map(|(_, s)| s).collect();
        assert_eq!(shares[0], 90);
        assert_eq!(shares[4], 10);
    }
}
