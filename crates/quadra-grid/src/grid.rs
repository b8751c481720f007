//! Cell occupancy for one packing attempt.
//!
//! A [`Grid`] is built fresh for every attempt and thrown away if the attempt
//! fails. It is never patched incrementally, so occupancy can only ever
//! reflect the weight vector it was packed from.

use crate::{Cell, GridSpec};

/// What occupies a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    /// Free to claim
    #[default]
    Empty,
    /// Permanently unusable
    Reserved,
    /// Claimed by the candidate at this index
    Candidate(usize),
}

impl Occupant {
    /// The claiming candidate, if any.
    pub const fn candidate(&self) -> Option<usize> {
        match self {
            Occupant::Candidate(index) => Some(*index),
            _ => None,
        }
    }
}

/// Row-major occupancy matrix.
///
/// Only ever built by [`Grid::empty`], so the cell vector always matches the
/// dimensions. Serialization is output-only for the same reason.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Occupant>,
}

impl Grid {
    /// A grid with nothing claimed and the spec's reserved cells marked.
    pub fn empty(spec: &GridSpec) -> Self {
        let mut cells = vec![Occupant::Empty; spec.cell_count()];
        for cell in spec.reserved() {
            cells[cell.index(spec.width())] = Occupant::Reserved;
        }
        Self {
            width: spec.width(),
            height: spec.height(),
            cells,
        }
    }

    /// Number of columns.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Occupant of `cell`, or `None` outside the grid.
    pub fn get(&self, cell: Cell) -> Option<Occupant> {
        if !cell.within(self.width, self.height) {
            return None;
        }
        Some(self.cells[cell.index(self.width)])
    }

    /// Whether `cell` is inside the grid and unclaimed.
    pub fn is_free(&self, cell: Cell) -> bool {
        self.get(cell) == Some(Occupant::Empty)
    }

    /// Whether a `size × size` square with top-left corner `(x, y)` can be
    /// claimed: it stays in bounds, avoids reserved cells and overlaps no
    /// existing claim. A zero-sized square never fits.
    pub fn fits(&self, x: u32, y: u32, size: u32) -> bool {
        if size == 0 {
            return false;
        }
        if x as u64 + size as u64 > self.width as u64
            || y as u64 + size as u64 > self.height as u64
        {
            return false;
        }

        for dy in 0..size {
            for dx in 0..size {
                let cell = Cell::new(x + dx, y + dy);
                if self.cells[cell.index(self.width)] != Occupant::Empty {
                    return false;
                }
            }
        }
        true
    }

    /// Mark a square as owned by `candidate`. Callers check [`Grid::fits`] first.
    pub(crate) fn claim(&mut self, x: u32, y: u32, size: u32, candidate: usize) {
        for dy in 0..size {
            for dx in 0..size {
                let index = Cell::new(x + dx, y + dy).index(self.width);
                debug_assert_eq!(self.cells[index], Occupant::Empty);
                self.cells[index] = Occupant::Candidate(candidate);
            }
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Occupant]> {
        self.cells.chunks(self.width as usize)
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Occupant)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, occupant)| {
            let cell = Cell::new(i as u32 % width, i as u32 / width);
            (cell, *occupant)
        })
    }

    /// Cells claimed by any candidate.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|o| matches!(o, Occupant::Candidate(_)))
            .count()
    }

    /// Cells claimed by one candidate.
    pub fn count_for(&self, candidate: usize) -> usize {
        self.cells
            .iter()
            .filter(|o| **o == Occupant::Candidate(candidate))
            .count()
    }

    /// Cells still free to claim.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|o| **o == Occupant::Empty).count()
    }
}
