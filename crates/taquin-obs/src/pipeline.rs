//! End-to-end observation pipeline over an external grid source.

use std::path::PathBuf;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use taquin_core::{
    AssetError, ConfigError, EncodeError, Frame, Grid, GridStateSource, PipelineError, RenderMode,
};

use crate::bank::SectionBank;
use crate::catalog::ImageCatalog;
use crate::composite::ImageCompositor;
use crate::normalize::Normalizer;
use crate::onehot::OneHotEncoder;
use crate::transformer::{Observation, Transformer};

/// Image-bank configuration for [`ObsPipeline::with_images`].
#[derive(Clone, Debug)]
pub struct ImageConfig {
    /// Directory of candidate source images (PNG/JPEG at minimum).
    pub image_folder: PathBuf,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Seed for source-image selection, for reproducible banks.
    pub seed: u64,
}

impl ImageConfig {
    /// A config with the default 200×200 canvas and seed 0.
    pub fn new(image_folder: impl Into<PathBuf>) -> Self {
        Self {
            image_folder: image_folder.into(),
            canvas_height: 200,
            canvas_width: 200,
            seed: 0,
        }
    }
}

/// What a render call produced.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutput {
    /// The raw grid snapshot (`state` mode).
    State(Grid),
    /// The composite frame (`rgb_array` mode).
    Frame(Frame),
    /// Nothing to return (`human` after drawing, or rendering disabled).
    Empty,
}

/// Observation pipeline over an external [`GridStateSource`].
///
/// Owns the encoders, the image catalog, the section bank, and the
/// seeded RNG used for source-image selection. The render mode is
/// fixed at construction from the source; per-call failures leave the
/// bank and the grid state untouched.
#[derive(Debug)]
pub struct ObsPipeline<S: GridStateSource> {
    source: S,
    grid_height: usize,
    grid_width: usize,
    mode: RenderMode,
    normalizer: Normalizer,
    onehot: OneHotEncoder,
    compositor: Option<ImageCompositor>,
    catalog: Option<ImageCatalog>,
    bank: Option<SectionBank>,
    rng: ChaCha8Rng,
}

impl<S: GridStateSource> ObsPipeline<S> {
    /// A pipeline with array encoders only (no image observations).
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyGrid`] if the source reports zero cells.
    pub fn new(source: S) -> Result<Self, PipelineError> {
        let grid_height = source.grid_height();
        let grid_width = source.grid_width();
        if grid_height == 0 || grid_width == 0 {
            return Err(ConfigError::EmptyGrid {
                height: grid_height,
                width: grid_width,
            }
            .into());
        }
        Ok(Self {
            mode: source.render_mode(),
            normalizer: Normalizer::new(grid_height, grid_width),
            onehot: OneHotEncoder::new(grid_height, grid_width),
            compositor: None,
            catalog: None,
            bank: None,
            rng: ChaCha8Rng::seed_from_u64(0),
            grid_height,
            grid_width,
            source,
        })
    }

    /// A pipeline with image support: scans the catalog and builds the
    /// initial section bank.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Config`] on an empty grid, empty canvas, or a
    ///   missing/empty image folder (fail fast, before any encode).
    /// - [`PipelineError::Asset`] if the first bank build fails.
    pub fn with_images(source: S, config: ImageConfig) -> Result<Self, PipelineError> {
        if config.canvas_height == 0 || config.canvas_width == 0 {
            return Err(ConfigError::EmptyCanvas {
                height: config.canvas_height,
                width: config.canvas_width,
            }
            .into());
        }
        let mut pipeline = Self::new(source)?;
        pipeline.compositor = Some(ImageCompositor::new(
            pipeline.grid_height,
            pipeline.grid_width,
            config.canvas_height,
            config.canvas_width,
        ));
        pipeline.catalog = Some(ImageCatalog::scan(config.image_folder)?);
        pipeline.rng = ChaCha8Rng::seed_from_u64(config.seed);
        pipeline.rebuild_bank()?;
        Ok(pipeline)
    }

    /// Discard the current bank and cut a new one from a freshly chosen
    /// source image (new episode). The swap is atomic: on failure the
    /// previous bank remains valid.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Config`] ([`ConfigError::ImagesNotConfigured`])
    ///   on a pipeline built without image support.
    /// - [`PipelineError::Asset`] if the chosen image cannot be loaded.
    pub fn rebuild_bank(&mut self) -> Result<(), PipelineError> {
        let catalog = self
            .catalog
            .as_ref()
            .ok_or(ConfigError::ImagesNotConfigured)?;
        let compositor = self
            .compositor
            .as_ref()
            .ok_or(ConfigError::ImagesNotConfigured)?;
        let (canvas_height, canvas_width) = compositor.canvas_size();
        let bank = SectionBank::build(
            catalog,
            self.grid_height,
            self.grid_width,
            canvas_height,
            canvas_width,
            &mut self.rng,
        )?;
        debug!("bank swapped in from {}", bank.source().display());
        self.bank = Some(bank);
        Ok(())
    }

    /// Re-list the image folder, refreshing the cached catalog. Does
    /// not touch the current bank.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Config`] ([`ConfigError::ImagesNotConfigured`])
    ///   on a pipeline built without image support, or if the re-listing
    ///   itself fails (previous listing is kept).
    pub fn rescan_images(&mut self) -> Result<(), PipelineError> {
        match self.catalog.as_mut() {
            Some(catalog) => catalog.rescan().map_err(Into::into),
            None => Err(ConfigError::ImagesNotConfigured.into()),
        }
    }

    /// The external source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The current section bank, if one has been built.
    pub fn bank(&self) -> Option<&SectionBank> {
        self.bank.as_ref()
    }

    /// The render mode fixed at construction.
    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Normalized continuous encoding of `grid` (`H*W` floats in `[0,1]`).
    pub fn normalize(&self, grid: &Grid) -> Result<Vec<f32>, PipelineError> {
        self.normalizer.encode(grid).map_err(Into::into)
    }

    /// One-hot categorical encoding of `grid` (`N*N` floats).
    pub fn one_hot(&self, grid: &Grid) -> Result<Vec<f32>, PipelineError> {
        self.onehot.encode(grid).map_err(Into::into)
    }

    /// Composite image encoding of `grid`.
    ///
    /// # Errors
    ///
    /// [`AssetError::BankNotBuilt`] (via [`PipelineError::Encode`]) when
    /// no bank has been successfully built; no partial composite is
    /// attempted.
    pub fn image_observation(&self, grid: &Grid) -> Result<Frame, PipelineError> {
        let compositor = self
            .compositor
            .as_ref()
            .ok_or(EncodeError::Asset(AssetError::BankNotBuilt))?;
        let bank = self
            .bank
            .as_ref()
            .ok_or(EncodeError::Asset(AssetError::BankNotBuilt))?;
        compositor.encode(grid, bank).map_err(Into::into)
    }

    /// Encode the source's current state with `transformer`.
    pub fn observe(&self, transformer: &Transformer) -> Result<Observation, PipelineError> {
        transformer
            .encode(&self.source.state(), self.bank.as_ref())
            .map_err(Into::into)
    }

    /// Dispatch a render request per the configured mode.
    ///
    /// - `state`: returns the raw grid; never touches the compositor.
    /// - `rgb_array`: returns the composite frame; no surface writes.
    /// - `human`: composes, draws onto the source's surface, flushes,
    ///   returns [`RenderOutput::Empty`]. Headless sources (no surface)
    ///   skip the draw.
    /// - `none`: returns [`RenderOutput::Empty`].
    ///
    /// Never mutates the grid state or the section bank.
    pub fn render(&mut self) -> Result<RenderOutput, PipelineError> {
        match self.mode {
            RenderMode::State => Ok(RenderOutput::State(self.source.state())),
            RenderMode::Disabled => Ok(RenderOutput::Empty),
            RenderMode::RgbArray => {
                let grid = self.source.state();
                Ok(RenderOutput::Frame(self.image_observation(&grid)?))
            }
            RenderMode::Human => {
                let grid = self.source.state();
                let frame = self.image_observation(&grid)?;
                if let Some(surface) = self.source.surface() {
                    surface.draw(&frame);
                    surface.flush();
                }
                Ok(RenderOutput::Empty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taquin_test_utils::MockGridSource;

    #[test]
    fn empty_grid_fails_construction() {
        #[derive(Debug)]
        struct Degenerate;
        impl GridStateSource for Degenerate {
            fn grid_height(&self) -> usize {
                0
            }
            fn grid_width(&self) -> usize {
                3
            }
            fn state(&self) -> Grid {
                unreachable!("construction fails before state is read")
            }
            fn render_mode(&self) -> RenderMode {
                RenderMode::State
            }
        }
        let err = ObsPipeline::new(Degenerate).unwrap_err();
        assert!(matches!(err, PipelineError::Config(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn array_encodings_work_without_images() {
        let source = MockGridSource::solved(3, 3, RenderMode::State);
        let pipeline = ObsPipeline::new(source).unwrap();
        let grid = pipeline.source().state();
        assert_eq!(pipeline.normalize(&grid).unwrap().len(), 9);
        assert_eq!(pipeline.one_hot(&grid).unwrap().len(), 81);
    }

    #[test]
    fn image_observation_without_bank_is_asset_error() {
        let source = MockGridSource::solved(2, 2, RenderMode::State);
        let pipeline = ObsPipeline::new(source).unwrap();
        let grid = pipeline.source().state();
        let err = pipeline.image_observation(&grid).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Encode(EncodeError::Asset(AssetError::BankNotBuilt))
        );
    }

    #[test]
    fn rebuild_without_images_is_config_error() {
        let source = MockGridSource::solved(2, 2, RenderMode::State);
        let mut pipeline = ObsPipeline::new(source).unwrap();
        let err = pipeline.rebuild_bank().unwrap_err();
        assert_eq!(
            err,
            PipelineError::Config(ConfigError::ImagesNotConfigured)
        );
    }

    #[test]
    fn state_render_passes_grid_through() {
        let source = MockGridSource::solved(2, 3, RenderMode::State);
        let mut pipeline = ObsPipeline::new(source).unwrap();
        match pipeline.render().unwrap() {
            RenderOutput::State(grid) => assert_eq!(grid, Grid::solved(2, 3)),
            other => panic!("expected state output, got {other:?}"),
        }
    }

    #[test]
    fn disabled_render_is_empty() {
        let source = MockGridSource::solved(2, 2, RenderMode::Disabled);
        let mut pipeline = ObsPipeline::new(source).unwrap();
        assert_eq!(pipeline.render().unwrap(), RenderOutput::Empty);
    }
}
