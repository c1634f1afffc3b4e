//! Observation encoders for sliding-tile puzzle grids.
//!
//! Converts raw integer grid state into the encodings downstream agents
//! consume: a normalized continuous array ([`Normalizer`]), a one-hot
//! categorical array ([`OneHotEncoder`]), and a visually composited
//! image ([`ImageCompositor`] over a [`SectionBank`]). [`ObsPipeline`]
//! wires the encoders to an external [`GridStateSource`] and dispatches
//! render requests per mode.
//!
//! [`GridStateSource`]: taquin_core::GridStateSource

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bank;
mod catalog;
mod composite;
mod normalize;
mod onehot;
mod pipeline;
mod transformer;

pub use bank::{SectionBank, SectionGeometry};
pub use catalog::ImageCatalog;
pub use composite::ImageCompositor;
pub use normalize::Normalizer;
pub use onehot::OneHotEncoder;
pub use pipeline::{ImageConfig, ObsPipeline, RenderOutput};
pub use transformer::{Observation, Transformer};
