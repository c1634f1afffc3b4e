//! One-hot categorical encoding.

use taquin_core::{EncodeError, Grid, ShapeError};

use crate::normalize::check_grid_shape;

/// Expands a raw grid into a flat categorical indicator array.
///
/// The output has length `N*N` (`N = H*W`): `N` consecutive segments of
/// length `N`, one per grid cell in row-major order. Cell `(i, j)` with
/// value `v` sets position `(i*W + j) * N + v`, so every segment holds
/// exactly one `1.0` and the argmax of each segment reconstructs the
/// original grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneHotEncoder {
    height: usize,
    width: usize,
}

impl OneHotEncoder {
    /// An encoder for `height × width` grids.
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Number of valid tile values per cell (`N = H*W`).
    pub fn tile_count(&self) -> usize {
        self.height * self.width
    }

    /// Number of output elements (`N*N`).
    pub fn obs_len(&self) -> usize {
        self.tile_count() * self.tile_count()
    }

    /// Encode a grid into a freshly allocated observation.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::Shape`] on a grid shape mismatch.
    /// - [`EncodeError::TileOutOfRange`] if any cell holds a value
    ///   outside `[0, N)`. Out-of-range values are never clamped.
    pub fn encode(&self, grid: &Grid) -> Result<Vec<f32>, EncodeError> {
        let mut out = vec![0.0; self.obs_len()];
        self.encode_into(grid, &mut out)?;
        Ok(out)
    }

    /// Encode a grid into a caller-allocated buffer of at least
    /// [`obs_len`](Self::obs_len) elements. The observation region is
    /// zeroed before the ones are written; on error its contents are
    /// unspecified.
    ///
    /// # Errors
    ///
    /// Same as [`encode`](Self::encode), plus [`EncodeError::Shape`]
    /// on a too-small buffer.
    pub fn encode_into(&self, grid: &Grid, out: &mut [f32]) -> Result<(), EncodeError> {
        check_grid_shape(grid, self.height, self.width)?;
        let len = self.obs_len();
        if out.len() < len {
            return Err(ShapeError::BufferTooSmall {
                expected: len,
                actual: out.len(),
            }
            .into());
        }
        let n = self.tile_count();
        out[..len].fill(0.0);
        for (row, col, value) in grid.iter() {
            if value as usize >= n {
                return Err(EncodeError::TileOutOfRange {
                    row,
                    col,
                    value,
                    tile_count: n,
                });
            }
            let segment = row * self.width + col;
            out[segment * n + value as usize] = 1.0;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn solved_3x3_sets_diagonal_positions() {
        let g = Grid::solved(3, 3);
        let obs = OneHotEncoder::new(3, 3).encode(&g).unwrap();
        assert_eq!(obs.len(), 81);
        let ones: Vec<usize> = obs
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 1.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(ones, vec![0, 10, 20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn out_of_range_tile_is_a_hard_error() {
        let g = Grid::new(2, 2, vec![0, 1, 4, 2]).unwrap();
        let err = OneHotEncoder::new(2, 2).encode(&g).unwrap_err();
        assert_eq!(
            err,
            EncodeError::TileOutOfRange {
                row: 1,
                col: 0,
                value: 4,
                tile_count: 4,
            }
        );
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let g = Grid::solved(2, 2);
        let err = OneHotEncoder::new(3, 3).encode(&g).unwrap_err();
        assert!(matches!(err, EncodeError::Shape(_)));
    }

    #[test]
    fn encode_into_zeroes_stale_buffer_contents() {
        let g = Grid::new(1, 2, vec![1, 0]).unwrap();
        let enc = OneHotEncoder::new(1, 2);
        let mut buf = vec![0.5; enc.obs_len()];
        enc.encode_into(&g, &mut buf).unwrap();
        assert_eq!(buf, vec![0.0, 1.0, 1.0, 0.0]);
    }

    proptest! {
        #[test]
        fn round_trips_through_segment_argmax(
            (height, width, cells) in (1usize..4, 1usize..4).prop_flat_map(|(h, w)| {
                let n = (h * w) as u32;
                (Just(h), Just(w), prop::collection::vec(0..n, h * w))
            })
        ) {
            let grid = Grid::new(height, width, cells.clone()).unwrap();
            let enc = OneHotEncoder::new(height, width);
            let obs = enc.encode(&grid).unwrap();
            let n = height * width;
            prop_assert_eq!(obs.len(), n * n);
            let total: f32 = obs.iter().sum();
            prop_assert_eq!(total, n as f32);
            for (segment, &cell) in cells.iter().enumerate() {
                let slice = &obs[segment * n..(segment + 1) * n];
                let hot = slice.iter().position(|&v| v == 1.0).unwrap();
                prop_assert_eq!(hot as u32, cell);
            }
        }
    }
}
