//! Outcomes of a weight-change request.

use quadra_grid::Unplaceable;

/// A committed weight change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Change {
    /// Candidate whose weight was set
    pub candidate: usize,
    /// Weight before the request
    pub from: u32,
    /// Weight after the request
    pub to: u32,
}

impl Change {
    /// Whether the request left the weight where it was.
    pub const fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Why a well-formed request was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The ballot would cost more than the budget. No packing was attempted.
    BudgetExceeded {
        candidate: usize,
        weight: u32,
        /// Total cost the ballot would have had, saturated at `u64::MAX`
        cost: u64,
        budget: u64,
    },
    /// The ballot is affordable but the greedy packer could not draw it.
    PlacementInfeasible {
        candidate: usize,
        weight: u32,
        /// First square that found no position
        blocked: usize,
        blocked_size: u32,
    },
}

impl Rejection {
    pub(crate) fn placement(candidate: usize, weight: u32, unplaceable: Unplaceable) -> Self {
        Rejection::PlacementInfeasible {
            candidate,
            weight,
            blocked: unplaceable.candidate,
            blocked_size: unplaceable.size,
        }
    }

    /// Candidate the rejected request targeted.
    pub const fn candidate(&self) -> usize {
        match self {
            Rejection::BudgetExceeded { candidate, .. }
            | Rejection::PlacementInfeasible { candidate, .. } => *candidate,
        }
    }

    /// Weight the rejected request asked for.
    pub const fn weight(&self) -> u32 {
        match self {
            Rejection::BudgetExceeded { weight, .. }
            | Rejection::PlacementInfeasible { weight, .. } => *weight,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::BudgetExceeded {
                candidate,
                weight,
                cost,
                budget,
            } => write!(
                f,
                "weight {weight} for candidate {candidate} would cost {cost} of {budget} points"
            ),
            Rejection::PlacementInfeasible {
                candidate,
                weight,
                blocked,
                blocked_size,
            } => write!(
                f,
                "weight {weight} for candidate {candidate} leaves no room for a \
                 {blocked_size}x{blocked_size} square for candidate {blocked}"
            ),
        }
    }
}

/// Result of a well-formed weight-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Weights and layout were committed
    Accepted(Change),
    /// Nothing changed
    Rejected(Rejection),
}

impl Decision {
    /// Whether the request was committed.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted(_))
    }

    /// The rejection, if any.
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Decision::Rejected(rejection) => Some(rejection),
            Decision::Accepted(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_accessors() {
        let budget = Rejection::BudgetExceeded {
            candidate: 0,
            weight: 10,
            cost: 100,
            budget: 99,
        };
        assert_eq!(budget.candidate(), 0);
        assert_eq!(budget.weight(), 10);

        let placement = Rejection::placement(2, 4, Unplaceable { candidate: 2, size: 4 });
        assert_eq!(
            placement,
            Rejection::PlacementInfeasible {
                candidate: 2,
                weight: 4,
                blocked: 2,
                blocked_size: 4
            }
        );
    }

    #[test]
    fn rejection_messages() {
        let budget = Rejection::BudgetExceeded {
            candidate: 0,
            weight: 10,
            cost: 100,
            budget: 99,
        };
        assert_eq!(
            budget.to_string(),
            "weight 10 for candidate 0 would cost 100 of 99 points"
        );

        let placement = Rejection::placement(2, 4, Unplaceable { candidate: 2, size: 4 });
        assert_eq!(
            placement.to_string(),
            "weight 4 for candidate 2 leaves no room for a 4x4 square for candidate 2"
        );
    }

    #[test]
    fn decision_helpers() {
        let accepted = Decision::Accepted(Change {
            candidate: 0,
            from: 0,
            to: 1,
        });
        assert!(accepted.is_accepted());
        assert!(accepted.rejection().is_none());

        let noop = Change {
            candidate: 1,
            from: 3,
            to: 3,
        };
        assert!(noop.is_noop());
    }
}
