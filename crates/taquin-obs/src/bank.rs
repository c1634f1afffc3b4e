//! Image section bank construction.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::io::Reader as ImageReader;
use log::{debug, info};
use rand::Rng;
use taquin_core::{AssetError, Frame};

use crate::catalog::ImageCatalog;

/// Derived pixel geometry of one grid section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionGeometry {
    /// Section height in pixels: `floor(canvas_h / grid_h)`.
    pub height: u32,
    /// Section width in pixels: `floor(canvas_w / grid_w)`.
    pub width: u32,
}

/// Ordered bank of image sections, one per tile value.
///
/// Built from a single source image: the image is resized to the canvas
/// and cut into `N = H*W` equal sections in row-major order, so section
/// `v` is the crop at the tile's home position `(v / W, v % W)`. Index
/// `0` (the blank tile) holds an all-black frame and is never pasted by
/// the compositor.
///
/// When the canvas dimensions are not exact multiples of the grid
/// shape, the residual bottom rows / right columns are not covered by
/// any section and stay canvas background in composites.
///
/// A bank is immutable once built; a new episode builds a replacement
/// and swaps it in whole.
#[derive(Clone, Debug)]
pub struct SectionBank {
    sections: Vec<Frame>,
    geometry: SectionGeometry,
    source: PathBuf,
}

impl SectionBank {
    /// Build a bank from an image chosen uniformly from `catalog`.
    ///
    /// # Errors
    ///
    /// [`AssetError::Read`] / [`AssetError::Decode`] if the chosen file
    /// cannot be opened or decoded.
    pub fn build<R: Rng>(
        catalog: &ImageCatalog,
        grid_height: usize,
        grid_width: usize,
        canvas_height: u32,
        canvas_width: u32,
        rng: &mut R,
    ) -> Result<Self, AssetError> {
        let path = catalog.choose(rng);
        Self::build_from_path(path, grid_height, grid_width, canvas_height, canvas_width)
    }

    /// Build a bank from a specific image file.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_from_path(
        path: &Path,
        grid_height: usize,
        grid_width: usize,
        canvas_height: u32,
        canvas_width: u32,
    ) -> Result<Self, AssetError> {
        debug!("loading source image {}", path.display());
        let reader = ImageReader::open(path).map_err(|e| AssetError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let decoded = reader.decode().map_err(|e| AssetError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let resized = decoded
            .resize_exact(canvas_width, canvas_height, FilterType::Triangle)
            .to_rgb8();
        let geometry = SectionGeometry {
            height: canvas_height / grid_height as u32,
            width: canvas_width / grid_width as u32,
        };

        let tile_count = grid_height * grid_width;
        let mut sections = Vec::with_capacity(tile_count);
        // Index 0 is the blank tile: reserved, never pasted.
        sections.push(Frame::new(geometry.height, geometry.width));
        for value in 1..tile_count {
            let row = (value / grid_width) as u32;
            let col = (value % grid_width) as u32;
            let crop = imageops::crop_imm(
                &resized,
                col * geometry.width,
                row * geometry.height,
                geometry.width,
                geometry.height,
            )
            .to_image();
            let frame = Frame::from_raw(geometry.height, geometry.width, crop.into_raw())
                .expect("crop yields exactly height*width*3 bytes");
            sections.push(frame);
        }

        info!(
            "section bank: {} sections of {}x{} px from {}",
            sections.len(),
            geometry.height,
            geometry.width,
            path.display()
        );
        Ok(Self {
            sections,
            geometry,
            source: path.to_path_buf(),
        })
    }

    /// Number of sections (`H*W`, including the reserved blank).
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the bank holds no sections. Never true for a built bank.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section pixel geometry.
    pub fn geometry(&self) -> SectionGeometry {
        self.geometry
    }

    /// The source image this bank was cut from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The section for tile `value`, or `None` if out of range.
    pub fn section(&self, value: u32) -> Option<&Frame> {
        self.sections.get(value as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taquin_test_utils::{gradient_image, write_corrupt_png, write_gradient_png};
    use tempfile::TempDir;

    #[test]
    fn bank_has_one_section_per_tile() {
        let dir = TempDir::new().unwrap();
        let path = write_gradient_png(dir.path(), "img.png", 90, 90);
        let bank = SectionBank::build_from_path(&path, 3, 3, 90, 90).unwrap();
        assert_eq!(bank.len(), 9);
        assert_eq!(
            bank.geometry(),
            SectionGeometry {
                height: 30,
                width: 30
            }
        );
        assert_eq!(bank.source(), path.as_path());
    }

    #[test]
    fn blank_section_is_black() {
        let dir = TempDir::new().unwrap();
        let path = write_gradient_png(dir.path(), "img.png", 60, 60);
        let bank = SectionBank::build_from_path(&path, 2, 2, 60, 60).unwrap();
        let blank = bank.section(0).unwrap();
        assert!(blank.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn sections_match_source_crops() {
        // Source already at canvas size, so resize is identity and
        // section pixels can be compared against the gradient directly.
        let dir = TempDir::new().unwrap();
        let path = write_gradient_png(dir.path(), "img.png", 8, 8);
        let source = gradient_image(8, 8);
        let bank = SectionBank::build_from_path(&path, 2, 2, 8, 8).unwrap();
        // Section 3 sits at grid cell (1, 1): pixel offset (4, 4).
        let section = bank.section(3).unwrap();
        for row in 0..4u32 {
            for col in 0..4u32 {
                let expected = source.get_pixel(col + 4, row + 4).0;
                assert_eq!(section.pixel(row, col), Some(expected));
            }
        }
    }

    #[test]
    fn non_divisible_canvas_floors_section_size() {
        let dir = TempDir::new().unwrap();
        let path = write_gradient_png(dir.path(), "img.png", 100, 100);
        let bank = SectionBank::build_from_path(&path, 3, 3, 100, 100).unwrap();
        assert_eq!(
            bank.geometry(),
            SectionGeometry {
                height: 33,
                width: 33
            }
        );
        assert_eq!(bank.len(), 9);
    }

    #[test]
    fn corrupt_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = write_corrupt_png(dir.path(), "bad.png");
        let err = SectionBank::build_from_path(&path, 2, 2, 8, 8).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.png");
        let err = SectionBank::build_from_path(&path, 2, 2, 8, 8).unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
    }
}
