//! Error types for quadra-grid.

use thiserror::Error;

use crate::Cell;

/// Result type for grid configuration.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised while validating a [`GridSpec`](crate::GridSpec).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    /// A reserved cell lies outside the grid.
    #[error("reserved cell {cell} is outside the {width}x{height} grid")]
    ReservedOutOfBounds { cell: Cell, width: u32, height: u32 },

    /// The same cell was reserved twice.
    #[error("reserved cell {0} listed more than once")]
    DuplicateReserved(Cell),

    /// More cells than a grid is allowed to hold.
    #[error("a {width}x{height} grid exceeds the limit of {max} cells")]
    TooLarge { width: u32, height: u32, max: u64 },

    /// Nothing is left to spend once reserved cells are removed.
    #[error("every cell of the {width}x{height} grid is reserved")]
    NoCapacity { width: u32, height: u32 },
}
