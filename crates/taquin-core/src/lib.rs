//! Core types and traits for the Taquin observation pipeline.
//!
//! This is the leaf crate with zero dependencies. It defines the grid
//! data model ([`Grid`]), the flat RGB raster ([`Frame`]), the interface
//! to the external puzzle simulation ([`GridStateSource`],
//! [`DisplaySurface`], [`RenderMode`]), and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod frame;
mod grid;
mod source;

pub use error::{AssetError, ConfigError, EncodeError, PipelineError, ShapeError};
pub use frame::Frame;
pub use grid::Grid;
pub use source::{DisplaySurface, GridStateSource, RenderMode};
