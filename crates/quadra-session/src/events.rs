//! Session timeline events.

use quadra_ledger::{AllocationSnapshot, Decision, Rejection};
use serde::{Deserialize, Serialize};

/// Things that happen during a voting session, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A weight change was committed (possibly to the same weight)
    WeightAccepted {
        seq: u64,
        candidate: usize,
        from: u32,
        to: u32,
        remaining: u64,
    },

    /// A request would have overspent the budget
    BudgetExceeded {
        seq: u64,
        candidate: usize,
        weight: u32,
        cost: u64,
        budget: u64,
    },

    /// A request was affordable but could not be drawn
    PlacementInfeasible {
        seq: u64,
        candidate: usize,
        weight: u32,
        blocked: usize,
        blocked_size: u32,
    },

    /// The ballot was closed and handed to reporting
    Finalized { seq: u64, spent: u64 },
}

impl SessionEvent {
    pub(crate) fn from_decision(seq: u64, decision: &Decision, remaining: u64) -> Self {
        match *decision {
            Decision::Accepted(change) => SessionEvent::WeightAccepted {
                seq,
                candidate: change.candidate,
                from: change.from,
                to: change.to,
                remaining,
            },
            Decision::Rejected(Rejection::BudgetExceeded {
                candidate,
                weight,
                cost,
                budget,
            }) => SessionEvent::BudgetExceeded {
                seq,
                candidate,
                weight,
                cost,
                budget,
            },
            Decision::Rejected(Rejection::PlacementInfeasible {
                candidate,
                weight,
                blocked,
                blocked_size,
            }) => SessionEvent::PlacementInfeasible {
                seq,
                candidate,
                weight,
                blocked,
                blocked_size,
            },
        }
    }

    /// Position in the timeline.
    pub fn seq(&self) -> u64 {
        match self {
            SessionEvent::WeightAccepted { seq, .. }
            | SessionEvent::BudgetExceeded { seq, .. }
            | SessionEvent::PlacementInfeasible { seq, .. }
            | SessionEvent::Finalized { seq, .. } => *seq,
        }
    }

    /// Whether this event records a rejected request.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SessionEvent::BudgetExceeded { .. } | SessionEvent::PlacementInfeasible { .. }
        )
    }
}

/// Everything a renderer needs after a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub candidates: Vec<String>,
    pub allocation: AllocationSnapshot,
    pub event_count: usize,
    pub finished: bool,
}
