//! Quadratic cost accounting.
//!
//! A weight of `w` costs `w²` points. The ballot is affordable while the sum
//! of all costs stays within the grid's budget.

use quadra_grid::{checked_total_cost, cost_of};

/// Total cost if `candidate` were set to `weight` and every other weight
/// stayed as-is.
///
/// Returns `None` if the total does not fit in a `u64`, which is over any
/// budget a grid can have.
pub fn hypothetical_cost(weights: &[u32], candidate: usize, weight: u32) -> Option<u64> {
    let own = weights.get(candidate).map_or(0, |&w| cost_of(w));
    let others = checked_total_cost(weights)?.checked_sub(own)?;
    others.checked_add(cost_of(weight))
}

/// Points left after spending `spent` from `budget`.
pub const fn remaining_after(budget: u64, spent: u64) -> u64 {
    budget.saturating_sub(spent)
}
