//! Deterministic first-fit square packing.
//!
//! Every packing attempt starts from an empty grid and walks the weight
//! vector in index order. Each non-zero weight `s` becomes an `s × s` square
//! placed at the first row-major position `(x, y)` where it fits. Once placed
//! a square never moves, even if a later candidate then has nowhere to go.
//!
//! An attempt is all-or-nothing: if any square cannot be placed the whole
//! attempt fails and the scratch grid is dropped.

use thiserror::Error;

use crate::{Cell, Grid, GridSpec};

/// Where one candidate's square was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Index of the candidate in the weight vector
    pub candidate: usize,
    /// Column of the top-left corner
    pub x: u32,
    /// Row of the top-left corner
    pub y: u32,
    /// Side length (the candidate's weight)
    pub size: u32,
}

impl Placement {
    /// Top-left corner.
    pub const fn origin(&self) -> Cell {
        Cell::new(self.x, self.y)
    }

    /// Cells covered, equal to the points spent on the candidate.
    pub const fn area(&self) -> u64 {
        self.size as u64 * self.size as u64
    }

    /// Whether the square covers `cell`.
    pub const fn covers(&self, cell: Cell) -> bool {
        cell.x >= self.x
            && cell.y >= self.y
            && cell.x - self.x < self.size
            && cell.y - self.y < self.size
    }

    /// Whether two squares share at least one cell.
    pub const fn overlaps(&self, other: &Placement) -> bool {
        (self.x as u64) < other.x as u64 + other.size as u64
            && (other.x as u64) < self.x as u64 + self.size as u64
            && (self.y as u64) < other.y as u64 + other.size as u64
            && (other.y as u64) < self.y as u64 + self.size as u64
    }

    /// Covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Placement { x, y, size, .. } = *self;
        (0..size).flat_map(move |dy| (0..size).map(move |dx| Cell::new(x + dx, y + dy)))
    }
}

/// A candidate whose square had no valid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no room for a {size}x{size} square for candidate {candidate}")]
pub struct Unplaceable {
    /// Index of the first candidate that could not be placed
    pub candidate: usize,
    /// Side length that was requested
    pub size: u32,
}

/// A complete, successful packing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Packing {
    placements: Vec<Placement>,
    grid: Grid,
}

impl Packing {
    /// The layout of a ballot with no votes.
    pub fn empty(spec: &GridSpec) -> Self {
        Self {
            placements: Vec::new(),
            grid: Grid::empty(spec),
        }
    }

    /// Placements in candidate index order; zero weights have none.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The occupancy grid the placements were claimed on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placement for one candidate, if it has a non-zero weight.
    pub fn placement_for(&self, candidate: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.candidate == candidate)
    }

    /// Cells covered by all placements.
    pub fn covered_area(&self) -> u64 {
        self.placements.iter().map(Placement::area).sum()
    }

    /// Split into placements and grid.
    pub fn into_parts(self) -> (Vec<Placement>, Grid) {
        (self.placements, self.grid)
    }
}

/// Place one `size × size` square at the first row-major position that fits.
///
/// Returns `None` without touching the grid if there is no such position or
/// `size` is zero.
pub fn place_square(grid: &mut Grid, candidate: usize, size: u32) -> Option<Placement> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.fits(x, y, size) {
                grid.claim(x, y, size, candidate);
                return Some(Placement {
                    candidate,
                    x,
                    y,
                    size,
                });
            }
        }
    }
    None
}

/// Pack every non-zero weight onto a fresh grid.
///
/// This is a pure function of `spec` and `weights`: the same inputs always
/// produce the same placements.
pub fn pack(spec: &GridSpec, weights: &[u32]) -> Result<Packing, Unplaceable> {
    let mut grid = Grid::empty(spec);
    let mut placements = Vec::with_capacity(weights.iter().filter(|&&w| w > 0).count());

    for (candidate, &size) in weights.iter().enumerate() {
        if size == 0 {
            continue;
        }
        match place_square(&mut grid, candidate, size) {
            Some(placement) => placements.push(placement),
            None => return Err(Unplaceable { candidate, size }),
        }
    }

    Ok(Packing { placements, grid })
}
