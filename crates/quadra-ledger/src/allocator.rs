//! The ballot allocator: committed weights plus the layout drawn from them.

use quadra_grid::{cost_of, pack, total_cost, Grid, GridSpec, Packing, Placement};
use tracing::{debug, trace};

use crate::budget::{hypothetical_cost, remaining_after};
use crate::decision::{Change, Decision, Rejection};
use crate::error::{LedgerError, Result};
use crate::results::{ResultEntry, ResultSet};

/// A weight-change request as it arrives from an untyped boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightChange {
    pub candidate: i64,
    pub weight: i64,
}

/// Point-in-time view of a ballot for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationSnapshot {
    pub weights: Vec<u32>,
    pub spent: u64,
    pub remaining: u64,
    pub budget: u64,
    pub placements: Vec<Placement>,
}

/// Owns a ballot's committed weights and their packed layout.
///
/// The weights and the layout only ever change together, and only after a
/// complete re-pack of the proposed weights has succeeded.
#[derive(Debug, Clone)]
pub struct Allocator {
    spec: GridSpec,
    candidates: Vec<String>,
    weights: Vec<u32>,
    packing: Packing,
}

impl Allocator {
    /// Start a ballot with every weight at zero.
    pub fn new(candidates: Vec<String>, spec: GridSpec) -> Result<Self> {
        if candidates.is_empty() {
            return Err(LedgerError::NoCandidates);
        }

        debug!(
            candidates = candidates.len(),
            width = spec.width(),
            height = spec.height(),
            budget = spec.budget(),
            "ballot opened"
        );

        Ok(Self {
            weights: vec![0; candidates.len()],
            packing: Packing::empty(&spec),
            candidates,
            spec,
        })
    }

    /// Set `candidate` to `weight` if the result is affordable and packable.
    ///
    /// Well-formed requests always return `Ok`; a rejection is reported in
    /// the [`Decision`] and leaves the ballot untouched.
    pub fn propose_weight(&mut self, candidate: usize, weight: u32) -> Result<Decision> {
        let from = self.check_index(candidate)?;
        let change = Change {
            candidate,
            from,
            to: weight,
        };

        if change.is_noop() {
            trace!(candidate, weight, "weight unchanged");
            return Ok(Decision::Accepted(change));
        }

        let budget = self.spec.budget();
        let cost = hypothetical_cost(&self.weights, candidate, weight).unwrap_or(u64::MAX);
        if cost > budget {
            debug!(candidate, weight, cost, budget, "rejected: over budget");
            return Ok(Decision::Rejected(Rejection::BudgetExceeded {
                candidate,
                weight,
                cost,
                budget,
            }));
        }

        let mut proposed = self.weights.clone();
        proposed[candidate] = weight;

        trace!(?proposed, "re-packing ballot");
        match pack(&self.spec, &proposed) {
            Ok(packing) => {
                self.weights = proposed;
                self.packing = packing;
                debug!(
                    candidate,
                    from,
                    to = weight,
                    remaining = self.remaining_budget(),
                    "weight committed"
                );
                Ok(Decision::Accepted(change))
            }
            Err(unplaceable) => {
                debug!(candidate, weight, %unplaceable, "rejected: cannot place");
                Ok(Decision::Rejected(Rejection::placement(
                    candidate,
                    weight,
                    unplaceable,
                )))
            }
        }
    }

    /// Raise a candidate's weight by one.
    pub fn increment(&mut self, candidate: usize) -> Result<Decision> {
        let current = self.check_index(candidate)?;
        self.propose_weight(candidate, current.saturating_add(1))
    }

    /// Lower a candidate's weight by one, stopping at zero.
    pub fn decrement(&mut self, candidate: usize) -> Result<Decision> {
        let current = self.check_index(candidate)?;
        self.propose_weight(candidate, current.saturating_sub(1))
    }

    /// Validate and apply a request from an untyped boundary.
    pub fn apply(&mut self, request: WeightChange) -> Result<Decision> {
        let count = self.candidates.len();
        let candidate = usize::try_from(request.candidate)
            .ok()
            .filter(|&i| i < count)
            .ok_or(LedgerError::CandidateOutOfRange {
                index: request.candidate,
                count,
            })?;

        if request.weight < 0 {
            return Err(LedgerError::NegativeWeight {
                candidate,
                weight: request.weight,
            });
        }
        let weight = u32::try_from(request.weight).map_err(|_| LedgerError::WeightTooLarge {
            candidate,
            weight: request.weight,
        })?;

        self.propose_weight(candidate, weight)
    }

    fn check_index(&self, candidate: usize) -> Result<u32> {
        self.weights
            .get(candidate)
            .copied()
            .ok_or(LedgerError::CandidateOutOfRange {
                index: i64::try_from(candidate).unwrap_or(i64::MAX),
                count: self.weights.len(),
            })
    }

    /// Grid configuration of this ballot.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Candidate names in ballot order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Committed weights in ballot order.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Committed weight of one candidate.
    pub fn weight(&self, candidate: usize) -> Option<u32> {
        self.weights.get(candidate).copied()
    }

    /// Points spent on one candidate.
    pub fn cost(&self, candidate: usize) -> Option<u64> {
        self.weight(candidate).map(cost_of)
    }

    /// Points the ballot can spend in total.
    pub fn budget(&self) -> u64 {
        self.spec.budget()
    }

    /// Points spent across all candidates.
    pub fn spent(&self) -> u64 {
        total_cost(&self.weights)
    }

    /// Points still available.
    pub fn remaining_budget(&self) -> u64 {
        remaining_after(self.budget(), self.spent())
    }

    /// Committed squares in candidate index order.
    pub fn placements(&self) -> &[Placement] {
        self.packing.placements()
    }

    /// Committed occupancy grid.
    pub fn grid(&self) -> &Grid {
        self.packing.grid()
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> AllocationSnapshot {
        AllocationSnapshot {
            weights: self.weights.clone(),
            spent: self.spent(),
            remaining: self.remaining_budget(),
            budget: self.budget(),
            placements: self.placements().to_vec(),
        }
    }

    /// Final `{candidate, weight, cost}` tuples for reporting.
    pub fn finalize(&self) -> ResultSet {
        let entries = self
            .candidates
            .iter()
            .zip(&self.weights)
            .map(|(name, &weight)| ResultEntry {
                candidate: name.clone(),
                weight,
                cost: cost_of(weight),
            })
            .collect();
        ResultSet::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quadra_grid::Cell;

    fn ballot(n: usize) -> Allocator {
        let names = (0..n).map(|i| format!("C{i}")).collect();
        Allocator::new(names, GridSpec::standard()).unwrap()
    }

    #[test]
    fn rejects_empty_candidate_list() {
        assert_eq!(
            Allocator::new(vec![], GridSpec::standard()).unwrap_err(),
            LedgerError::NoCandidates
        );
    }

    #[test]
    fn starts_empty() {
        let b = ballot(3);
        assert_eq!(b.weights(), &[0, 0, 0]);
        assert_eq!(b.remaining_budget(), 99);
        assert!(b.placements().is_empty());
        assert_eq!(b.grid().get(Cell::new(9, 0)), Some(quadra_grid::Occupant::Reserved));
    }

    #[test]
    fn first_unit_lands_at_origin() {
        let mut b = ballot(3);
        let decision = b.propose_weight(0, 1).unwrap();
        assert_eq!(
            decision,
            Decision::Accepted(Change {
                candidate: 0,
                from: 0,
                to: 1
            })
        );
        assert_eq!(b.remaining_budget(), 98);
        assert_eq!(b.placements()[0].origin(), Cell::ORIGIN);
    }

    #[test]
    fn over_budget_is_rejected_without_change() {
        let mut b = ballot(3);
        let decision = b.propose_weight(0, 10).unwrap();
        assert_eq!(
            decision,
            Decision::Rejected(Rejection::BudgetExceeded {
                candidate: 0,
                weight: 10,
                cost: 100,
                budget: 99
            })
        );
        assert_eq!(b.weights(), &[0, 0, 0]);
        assert!(b.placements().is_empty());
    }

    #[test]
    fn unplaceable_is_rejected_without_change() {
        let mut b = ballot(3);
        b.propose_weight(0, 1).unwrap();
        b.propose_weight(1, 9).unwrap();
        let before = b.snapshot();
        let grid_before = b.grid().clone();

        let decision = b.propose_weight(2, 4).unwrap();
        assert_eq!(
            decision.rejection(),
            Some(&Rejection::PlacementInfeasible {
                candidate: 2,
                weight: 4,
                blocked: 2,
                blocked_size: 4
            })
        );
        assert_eq!(b.snapshot(), before);
        assert_eq!(b.grid(), &grid_before);
    }

    #[test]
    fn noop_proposal_is_accepted() {
        let mut b = ballot(2);
        b.propose_weight(1, 5).unwrap();
        let before = b.snapshot();

        let decision = b.propose_weight(1, 5).unwrap();
        assert!(decision.is_accepted());
        assert_eq!(b.snapshot(), before);

        let decision = b.propose_weight(0, 0).unwrap();
        assert!(decision.is_accepted());
        assert_eq!(b.snapshot(), before);
    }

    #[test]
    fn increment_and_decrement() {
        let mut b = ballot(2);
        for _ in 0..3 {
            assert!(b.increment(1).unwrap().is_accepted());
        }
        assert_eq!(b.weight(1), Some(3));
        assert_eq!(b.cost(1), Some(9));

        assert!(b.decrement(1).unwrap().is_accepted());
        assert_eq!(b.weight(1), Some(2));

        // Decrement at zero proposes zero again.
        let decision = b.decrement(0).unwrap();
        assert_eq!(
            decision,
            Decision::Accepted(Change {
                candidate: 0,
                from: 0,
                to: 0
            })
        );
    }

    #[test]
    fn increment_stops_at_budget() {
        let mut b = ballot(1);
        for _ in 0..9 {
            assert!(b.increment(0).unwrap().is_accepted());
        }
        assert!(!b.increment(0).unwrap().is_accepted());
        assert_eq!(b.weight(0), Some(9));
        assert_eq!(b.remaining_budget(), 18);
    }

    #[test]
    fn shrinking_repacks_everyone() {
        let mut b = ballot(2);
        b.propose_weight(0, 3).unwrap();
        b.propose_weight(1, 2).unwrap();
        assert_eq!(b.placements()[1].origin(), Cell::new(3, 0));

        b.propose_weight(0, 1).unwrap();
        assert_eq!(b.placements()[1].origin(), Cell::new(1, 0));

        b.propose_weight(0, 0).unwrap();
        assert_eq!(b.placements().len(), 1);
        assert_eq!(b.placements()[0].origin(), Cell::ORIGIN);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut b = ballot(3);
        assert_eq!(
            b.propose_weight(3, 1),
            Err(LedgerError::CandidateOutOfRange { index: 3, count: 3 })
        );
        assert!(b.increment(7).is_err());
        assert!(b.decrement(7).is_err());
    }

    #[test]
    fn apply_validates_boundary_input() {
        let mut b = ballot(3);
        assert_eq!(
            b.apply(WeightChange {
                candidate: -1,
                weight: 1
            }),
            Err(LedgerError::CandidateOutOfRange {
                index: -1,
                count: 3
            })
        );
        assert_eq!(
            b.apply(WeightChange {
                candidate: 1,
                weight: -2
            }),
            Err(LedgerError::NegativeWeight {
                candidate: 1,
                weight: -2
            })
        );
        assert_eq!(
            b.apply(WeightChange {
                candidate: 1,
                weight: i64::MAX
            }),
            Err(LedgerError::WeightTooLarge {
                candidate: 1,
                weight: i64::MAX
            })
        );
        assert_eq!(b.weights(), &[0, 0, 0]);

        assert!(b
            .apply(WeightChange {
                candidate: 2,
                weight: 4
            })
            .unwrap()
            .is_accepted());
        assert_eq!(b.weights(), &[0, 0, 4]);
    }

    #[test]
    fn finalize_reports_every_candidate() {
        let mut b = ballot(3);
        b.propose_weight(0, 1).unwrap();
        b.propose_weight(1, 9).unwrap();

        let results = b.finalize();
        let rows: Vec<_> = results
            .entries()
            .iter()
            .map(|e| (e.candidate.as_str(), e.weight, e.cost))
            .collect();
        assert_eq!(rows, vec![("C0", 1, 1), ("C1", 9, 81), ("C2", 0, 0)]);
        assert_eq!(results.total_cost(), b.spent());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Set(usize, u32),
        Inc(usize),
        Dec(usize),
    }

    fn op_strategy(n: usize) -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..n, 0u32..=10).prop_map(|(i, w)| Op::Set(i, w)),
            (0..n).prop_map(Op::Inc),
            (0..n).prop_map(Op::Dec),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_request_sequence(
            ops in prop::collection::vec(op_strategy(4), 0..40)
        ) {
            let mut b = ballot(4);
            for op in ops {
                let before = b.snapshot();
                let decision = match op {
                    Op::Set(i, w) => b.propose_weight(i, w),
                    Op::Inc(i) => b.increment(i),
                    Op::Dec(i) => b.decrement(i),
                }
                .unwrap();

                // Budget never exceeded
                prop_assert!(b.spent() <= b.budget());

                // Layout always matches a fresh pack of the committed weights
                let fresh = pack(b.spec(), b.weights()).unwrap();
                prop_assert_eq!(fresh.placements(), b.placements());
                prop_assert_eq!(b.grid().occupied_count() as u64, b.spent());

                // Rejections are atomic
                if !decision.is_accepted() {
                    prop_assert_eq!(b.snapshot(), before);
                }
            }
        }
    }
}
