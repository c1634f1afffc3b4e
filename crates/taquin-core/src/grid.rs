//! Puzzle grid state.

use crate::error::ShapeError;

/// An `H×W` grid of tile indices, stored row-major.
///
/// Each cell holds a tile index in `[0, N)` where `N = H*W`; index `0`
/// denotes the blank tile. Grids are owned and mutated by the external
/// puzzle simulation; everything in this workspace reads them only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::EmptyGrid`] if `height * width == 0`.
    /// - [`ShapeError::CellCountMismatch`] if `cells.len() != height * width`.
    pub fn new(height: usize, width: usize, cells: Vec<u32>) -> Result<Self, ShapeError> {
        if height == 0 || width == 0 {
            return Err(ShapeError::EmptyGrid { height, width });
        }
        if cells.len() != height * width {
            return Err(ShapeError::CellCountMismatch {
                expected: height * width,
                actual: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    ///
    /// # Panics
    ///
    /// Panics if `height * width == 0`.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> u32) -> Self {
        assert!(height > 0 && width > 0, "grid must have at least one cell");
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    /// The solved configuration: cell `(i, j)` holds `i*W + j`, with the
    /// blank at the origin.
    pub fn solved(height: usize, width: usize) -> Self {
        Self::from_fn(height, width, |row, col| (row * width + col) as u32)
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Total number of tiles, `N = H*W`.
    pub fn tile_count(&self) -> usize {
        self.height * self.width
    }

    /// The tile value at `(row, col)`, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Row-major cell values.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate cells as `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &v)| (i / self.width, i % self.width, v))
    }
}
