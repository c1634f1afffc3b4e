//! Composite image assembly.

use taquin_core::{EncodeError, Frame, Grid, ShapeError};

use crate::bank::SectionBank;
use crate::normalize::check_grid_shape;

/// Reassembles a full image from a section bank according to grid state.
///
/// Every encode call allocates a fresh black canvas and pastes
/// `bank[v]` at pixel offset `(i * section_h, j * section_w)` for each
/// cell `(i, j)` with value `v != 0`. Blank cells (and any residual
/// margin when the canvas is not an exact multiple of the grid shape)
/// keep the canvas background. Deterministic given `(grid, bank)`;
/// never mutates either.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCompositor {
    grid_height: usize,
    grid_width: usize,
    canvas_height: u32,
    canvas_width: u32,
}

impl ImageCompositor {
    /// A compositor for `grid_height × grid_width` grids rendered onto a
    /// `canvas_height × canvas_width` pixel canvas.
    pub fn new(
        grid_height: usize,
        grid_width: usize,
        canvas_height: u32,
        canvas_width: u32,
    ) -> Self {
        Self {
            grid_height,
            grid_width,
            canvas_height,
            canvas_width,
        }
    }

    /// Canvas `(height, width)` in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_height, self.canvas_width)
    }

    /// Output shape `[canvas_h, canvas_w, 3]`.
    pub fn obs_shape(&self) -> [usize; 3] {
        [self.canvas_height as usize, self.canvas_width as usize, 3]
    }

    /// Compose a full frame from `grid` and `bank`.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::Shape`] on a grid shape mismatch or when
    ///   `bank.len() != H*W`.
    /// - [`EncodeError::TileOutOfRange`] if a cell indexes past the bank.
    pub fn encode(&self, grid: &Grid, bank: &SectionBank) -> Result<Frame, EncodeError> {
        check_grid_shape(grid, self.grid_height, self.grid_width)?;
        let tile_count = self.grid_height * self.grid_width;
        if bank.len() != tile_count {
            return Err(ShapeError::BankLengthMismatch {
                expected: tile_count,
                actual: bank.len(),
            }
            .into());
        }

        let geometry = bank.geometry();
        let mut canvas = Frame::new(self.canvas_height, self.canvas_width);
        for (row, col, value) in grid.iter() {
            if value == 0 {
                continue;
            }
            let section = bank
                .section(value)
                .ok_or(EncodeError::TileOutOfRange {
                    row,
                    col,
                    value,
                    tile_count,
                })?;
            canvas.blit(
                section,
                row as u32 * geometry.height,
                col as u32 * geometry.width,
            );
        }
        Ok(canvas)
    }
}
