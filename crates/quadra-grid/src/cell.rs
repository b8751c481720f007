//! Grid cell coordinates.
//!
//! `x` is the column (left to right) and `y` is the row (top to bottom), so
//! the standard reserved cell "row 0, rightmost column" is `Cell::new(9, 0)`.

/// A position on the ballot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl Cell {
    /// Top-left corner of every grid.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new cell coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether this cell lies inside a `width × height` grid.
    pub const fn within(&self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }

    /// Row-major index of this cell in a grid of the given width.
    #[inline]
    pub const fn index(&self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
