//! Continuous normalization of grid state.

use taquin_core::{EncodeError, Grid, ShapeError};

/// Scales a raw grid into a bounded continuous observation.
///
/// Every cell is divided by `N = H*W`, so valid tile values land in
/// `[0, 1]` by construction. Output is row-major, length `H*W`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalizer {
    height: usize,
    width: usize,
}

impl Normalizer {
    /// An encoder for `height × width` grids.
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Number of output elements (`H*W`).
    pub fn obs_len(&self) -> usize {
        self.height * self.width
    }

    /// Encode a grid into a freshly allocated observation.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Shape`] if the grid's shape does not match the
    /// configured dimensions.
    pub fn encode(&self, grid: &Grid) -> Result<Vec<f32>, EncodeError> {
        let mut out = vec![0.0; self.obs_len()];
        self.encode_into(grid, &mut out)?;
        Ok(out)
    }

    /// Encode a grid into a caller-allocated buffer of at least
    /// [`obs_len`](Self::obs_len) elements. Buffer contents beyond the
    /// observation are left untouched.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Shape`] on a grid shape mismatch or a too-small
    /// buffer.
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
        let scale = len as f32;
        for (slot, &value) in out[..len].iter_mut().zip(grid.cells()) {
            *slot = value as f32 / scale;
        }
        Ok(())
    }
}

/// Shape gate shared by every encoder in this crate.
pub(crate) fn check_grid_shape(
    grid: &Grid,
    height: usize,
    width: usize,
) -> Result<(), EncodeError> {
    if grid.shape() != (height, width) {
        return Err(ShapeError::GridShapeMismatch {
            expected: (height, width),
            actual: grid.shape(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn solved_3x3_sums_to_four() {
        let g = Grid::solved(3, 3);
        let obs = Normalizer::new(3, 3).encode(&g).unwrap();
        assert_eq!(obs.len(), 9);
        let sum: f32 = obs.iter().sum();
        assert!((sum - 4.0).abs() < 1e-6, "sum = {sum}");
    }

    #[test]
    fn values_are_cell_over_n() {
        let g = Grid::new(2, 2, vec![0, 3, 1, 2]).unwrap();
        let obs = Normalizer::new(2, 2).encode(&g).unwrap();
        assert_eq!(obs, vec![0.0, 0.75, 0.25, 0.5]);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let g = Grid::solved(2, 3);
        let err = Normalizer::new(3, 2).encode(&g).unwrap_err();
        assert_eq!(
            err,
            EncodeError::Shape(ShapeError::GridShapeMismatch {
                expected: (3, 2),
                actual: (2, 3),
            })
        );
    }

    #[test]
    fn small_buffer_is_rejected() {
        let g = Grid::solved(2, 2);
        let mut buf = [0.0; 3];
        let err = Normalizer::new(2, 2)
            .encode_into(&g, &mut buf)
            .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::Shape(ShapeError::BufferTooSmall { .. })
        ));
    }

    proptest! {
        #[test]
        fn output_bounded_and_sum_scales(
            (height, width, cells) in (1usize..5, 1usize..5).prop_flat_map(|(h, w)| {
                let n = (h * w) as u32;
                (Just(h), Just(w), prop::collection::vec(0..n, h * w))
            })
        ) {
            let grid = Grid::new(height, width, cells.clone()).unwrap();
            let obs = Normalizer::new(height, width).encode(&grid).unwrap();
            let n = (height * width) as f32;
            for &v in &obs {
                prop_assert!((0.0..=1.0).contains(&v));
            }
            let raw_sum: f32 = cells.iter().map(|&v| v as f32).sum();
            let sum: f32 = obs.iter().sum();
            prop_assert!((sum - raw_sum / n).abs() < 1e-4);
        }
    }
}
