//! Taquin: observation encodings for sliding-tile puzzle environments.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Taquin sub-crates. For most users, adding `taquin` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use taquin::prelude::*;
//!
//! // A minimal simulation exposing a fixed 2x2 grid.
//! struct Puzzle {
//!     grid: Grid,
//! }
//! impl GridStateSource for Puzzle {
//!     fn grid_height(&self) -> usize { self.grid.height() }
//!     fn grid_width(&self) -> usize { self.grid.width() }
//!     fn state(&self) -> Grid { self.grid.clone() }
//!     fn render_mode(&self) -> RenderMode { RenderMode::State }
//! }
//!
//! let puzzle = Puzzle { grid: Grid::solved(2, 2) };
//! let pipeline = ObsPipeline::new(puzzle).unwrap();
//! let grid = pipeline.source().state();
//!
//! // Normalized: each cell divided by N = 4.
//! assert_eq!(pipeline.normalize(&grid).unwrap(), vec![0.0, 0.25, 0.5, 0.75]);
//!
//! // One-hot: N segments of length N, one 1.0 each.
//! let one_hot = pipeline.one_hot(&grid).unwrap();
//! assert_eq!(one_hot.len(), 16);
//! assert_eq!(one_hot.iter().filter(|&&v| v == 1.0).count(), 4);
//! ```
//!
//! Image observations additionally need an image folder; see
//! [`obs::ImageConfig`] and [`obs::ObsPipeline::with_images`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`taquin-core`).
///
/// Contains [`types::Grid`], [`types::Frame`], the external-simulation
/// traits ([`types::GridStateSource`], [`types::DisplaySurface`]), and
/// the error taxonomy.
pub use taquin_core as types;

/// Observation encoders and the pipeline (`taquin-obs`).
///
/// Build an [`obs::ObsPipeline`] over a grid source, or use the
/// encoders ([`obs::Normalizer`], [`obs::OneHotEncoder`],
/// [`obs::ImageCompositor`]) directly.
pub use taquin_obs as obs;

/// Common imports for typical Taquin usage.
///
/// ```rust
/// use taquin::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use taquin_core::{DisplaySurface, Frame, Grid, GridStateSource, RenderMode};

    // Errors
    pub use taquin_core::{AssetError, ConfigError, EncodeError, PipelineError, ShapeError};

    // Encoders and pipeline
    pub use taquin_obs::{
        ImageCompositor, ImageConfig, Normalizer, Observation, ObsPipeline, OneHotEncoder,
        RenderOutput, SectionBank, Transformer,
    };
}
