//! Quadra Vote Grid
//!
//! Fixed-size occupancy grid and deterministic square packing for
//! quadratic-voting ballots.
//!
//! # Capacity Equals Budget
//!
//! A ballot spends points: a weight of `w` on one candidate costs `w²`.
//! The same allocation is drawn as a `w × w` square on a fixed grid, so every
//! point spent is exactly one grid cell. Some cells are permanently reserved
//! (the standard grid reserves its top-right corner), which is why the budget
//! is always derived as:
//!
//! ```text
//! budget = width × height − |reserved|
//! ```
//!
//! # First-Fit Packing
//!
//! [`pack`] places every non-zero weight from scratch, in candidate index
//! order, at the first row-major position where the whole square fits. There
//! is no backtracking: a weight vector that a smarter packer could fit may
//! still be rejected here, and the result for a given vector never changes.

mod cell;
mod error;
mod grid;
mod pack;
mod spec;

pub use cell::Cell;
pub use error::{GridError, Result};
pub use grid::{Grid, Occupant};
pub use pack::{pack, place_square, Packing, Placement, Unplaceable};
pub use spec::{GridSpec, MAX_CELLS};

/// Width of the standard ballot grid.
pub const STANDARD_WIDTH: u32 = 10;

/// Height of the standard ballot grid.
pub const STANDARD_HEIGHT: u32 = 10;

/// Points available on the standard grid (100 cells, one reserved).
pub const STANDARD_BUDGET: u64 = 99;

// Compile-time assertion of the capacity-equals-budget invariant
const _: () = assert!((STANDARD_WIDTH * STANDARD_HEIGHT) as u64 - 1 == STANDARD_BUDGET);

/// Points spent on a single weight: `weight²`.
#[inline]
pub const fn cost_of(weight: u32) -> u64 {
    let w = weight as u64;
    w * w
}

/// Total points spent across a weight vector, or `None` if it overflows.
pub fn checked_total_cost(weights: &[u32]) -> Option<u64> {
    weights
        .iter()
        .try_fold(0u64, |acc, &w| acc.checked_add(cost_of(w)))
}

/// Total points spent across a weight vector, saturating at `u64::MAX`.
pub fn total_cost(weights: &[u32]) -> u64 {
    weights
        .iter()
        .fold(0u64, |acc, &w| acc.saturating_add(cost_of(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_budget_matches_spec() {
        assert_eq!(GridSpec::standard().budget(), STANDARD_BUDGET);
    }

    #[test]
    fn cost_is_square_of_weight() {
        assert_eq!(cost_of(0), 0);
        assert_eq!(cost_of(1), 1);
        assert_eq!(cost_of(9), 81);
        assert_eq!(cost_of(10), 100);
        assert_eq!(cost_of(u32::MAX), (u32::MAX as u64) * (u32::MAX as u64));
    }

    #[test]
    fn total_cost_sums_squares() {
        assert_eq!(total_cost(&[]), 0);
        assert_eq!(total_cost(&[1, 9, 0]), 82);
        assert_eq!(total_cost(&[1, 9, 4]), 98);
    }

    #[test]
    fn total_cost_never_wraps() {
        let huge = [u32::MAX, u32::MAX];
        assert_eq!(checked_total_cost(&huge), None);
        assert_eq!(total_cost(&huge), u64::MAX);
        assert_eq!(checked_total_cost(&[u32::MAX]), Some(cost_of(u32::MAX)));
        assert_eq!(checked_total_cost(&[3, 4]), Some(25));
    }
}
