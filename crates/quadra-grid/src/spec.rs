//! Grid configuration.
//!
//! A [`GridSpec`] fixes the dimensions and the reserved cells of a ballot
//! grid. The budget is never configured directly: it is always the number of
//! cells that can actually be claimed.

use crate::error::{GridError, Result};
use crate::{Cell, STANDARD_HEIGHT, STANDARD_WIDTH};

/// Largest number of cells (reserved included) a grid may have.
///
/// Every packing attempt allocates one occupancy slot per cell, so the
/// dimensions are bounded before anything is allocated.
pub const MAX_CELLS: u64 = 1 << 20;

/// Validated grid dimensions and reserved cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridSpec {
    width: u32,
    height: u32,
    reserved: Vec<Cell>,
}

impl GridSpec {
    /// The 10×10 ballot grid with its top-right cell reserved (budget 99).
    pub fn standard() -> Self {
        Self {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            reserved: vec![Cell::new(STANDARD_WIDTH - 1, 0)],
        }
    }

    /// A `width × height` grid reserving the cell at row 0, rightmost column.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        Self::with_reserved(width, height, [Cell::new(width - 1, 0)])
    }

    /// A grid with an arbitrary reserved set.
    ///
    /// Reserved cells are kept in row-major order regardless of input order.
    pub fn with_reserved(
        width: u32,
        height: u32,
        reserved: impl IntoIterator<Item = Cell>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if u64::from(width) * u64::from(height) > MAX_CELLS {
            return Err(GridError::TooLarge {
                width,
                height,
                max: MAX_CELLS,
            });
        }

        let mut cells: Vec<Cell> = Vec::new();
        for cell in reserved {
            if !cell.within(width, height) {
                return Err(GridError::ReservedOutOfBounds { cell, width, height });
            }
            if cells.contains(&cell) {
                return Err(GridError::DuplicateReserved(cell));
            }
            cells.push(cell);
        }
        cells.sort_by_key(|c| c.index(width));

        let spec = Self {
            width,
            height,
            reserved: cells,
        };
        if spec.budget() == 0 {
            return Err(GridError::NoCapacity { width, height });
        }
        Ok(spec)
    }

    /// Number of columns.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reserved cells in row-major order.
    pub fn reserved(&self) -> &[Cell] {
        &self.reserved
    }

    /// Whether `cell` can never be claimed.
    pub fn is_reserved(&self, cell: Cell) -> bool {
        self.reserved.contains(&cell)
    }

    /// Total cells, reserved or not.
    pub const fn capacity(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Spendable points: capacity minus reserved cells.
    pub fn budget(&self) -> u64 {
        self.capacity() - self.reserved.len() as u64
    }

    /// Number of cells in the backing storage of a [`Grid`](crate::Grid).
    ///
    /// Bounded by [`MAX_CELLS`], so this fits a `usize` on every target.
    pub(crate) fn cell_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::standard()
    }
}
