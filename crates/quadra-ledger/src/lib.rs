//! Quadratic-Voting Budget Ledger
//!
//! Tracks the vote weight of every candidate on a ballot and admits changes
//! only when they keep the ballot both affordable and drawable.
//!
//! # Two-Phase Acceptance
//!
//! A request to set candidate `i` to weight `w` is checked twice:
//!
//! 1. **Budget**: `w² + Σ_{j≠i} weight_j² ≤ budget`. Failing this rejects the
//!    request before any packing is attempted.
//! 2. **Placement**: the whole hypothetical weight vector is packed from
//!    scratch by [`quadra_grid::pack`]. Any unplaceable square rejects the
//!    request.
//!
//! Only when both pass are the new weights and the new layout committed,
//! together. A rejected request leaves the ledger exactly as it was.
//!
//! # Usage
//!
//! ```
//! use quadra_grid::GridSpec;
//! use quadra_ledger::Allocator;
//!
//! let mut ballot = Allocator::new(vec!["A".into(), "B".into()], GridSpec::standard())?;
//! assert!(ballot.propose_weight(0, 3)?.is_accepted());
//! assert_eq!(ballot.remaining_budget(), 90);
//! # Ok::<(), quadra_ledger::LedgerError>(())
//! ```

mod allocator;
mod budget;
mod decision;
mod error;
mod results;

pub use allocator::{AllocationSnapshot, Allocator, WeightChange};
pub use budget::{hypothetical_cost, remaining_after};
pub use decision::{Change, Decision, Rejection};
pub use error::{LedgerError, Result};
pub use results::{ResultEntry, ResultSet};
