//! Test utilities and mock types for Taquin development.
//!
//! Provides a mock [`GridStateSource`], a [`DisplaySurface`] that records
//! draws, and image-fixture helpers for section-bank tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use taquin_core::{DisplaySurface, Frame, Grid, GridStateSource, RenderMode};

/// Mock implementation of [`GridStateSource`] backed by an owned grid.
///
/// Mutate `grid` between calls to simulate puzzle moves; the recording
/// surface is always present, so `Human` renders can be asserted on.
#[derive(Debug)]
pub struct MockGridSource {
    pub grid: Grid,
    pub mode: RenderMode,
    pub surface: RecordingSurface,
}

impl MockGridSource {
    pub fn new(grid: Grid, mode: RenderMode) -> Self {
        Self {
            grid,
            mode,
            surface: RecordingSurface::default(),
        }
    }

    /// A source holding the solved configuration.
    pub fn solved(height: usize, width: usize, mode: RenderMode) -> Self {
        Self::new(Grid::solved(height, width), mode)
    }
}

impl GridStateSource for MockGridSource {
    fn grid_height(&self) -> usize {
        self.grid.height()
    }

    fn grid_width(&self) -> usize {
        self.grid.width()
    }

    fn state(&self) -> Grid {
        self.grid.clone()
    }

    fn render_mode(&self) -> RenderMode {
        self.mode
    }

    fn surface(&mut self) -> Option<&mut dyn DisplaySurface> {
        Some(&mut self.surface)
    }
}

/// A [`DisplaySurface`] that records every draw and flush.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<Frame>,
    pub flushes: usize,
}

impl DisplaySurface for RecordingSurface {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// A deterministic RGB test image: every pixel encodes its coordinates,
/// so crops can be checked back against pixel positions.
pub fn gradient_image(width: u32, height: u32) -> image::RgbImage {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

/// Write a gradient PNG named `name` under `dir`, returning its path.
pub fn write_gradient_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient_image(width, height)
        .save(&path)
        .expect("write test image");
    path
}

/// Write a file with the given name that is not a decodable image.
pub fn write_corrupt_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"not an image").expect("write corrupt file");
    path
}
