//! Error types for the Taquin observation pipeline.
//!
//! One enum per failure class, organized by when the failure can occur:
//! configuration (construction time), asset loading (bank build time),
//! shape consistency, and encoding (per call). [`PipelineError`] is the
//! umbrella returned by the top-level pipeline operations.
//!
//! Nothing here is retried or downgraded to a default: a corrupted tile
//! value or an empty image folder stops the calling pipeline rather than
//! producing a plausible-looking but wrong observation.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Configuration errors, surfaced at construction time.
///
/// These fail fast: no encode call succeeds on a misconfigured pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured image folder does not exist or cannot be listed.
    ImageFolderMissing {
        /// The configured folder.
        path: PathBuf,
        /// The underlying I/O failure.
        reason: String,
    },
    /// The configured image folder contains no files.
    ImageFolderEmpty {
        /// The configured folder.
        path: PathBuf,
    },
    /// A render mode string is not one of `human`, `rgb_array`, `state`,
    /// `none`.
    InvalidRenderMode {
        /// The unrecognized mode string.
        mode: String,
    },
    /// The grid has zero cells (`H*W == 0`).
    EmptyGrid {
        /// Configured grid height.
        height: usize,
        /// Configured grid width.
        width: usize,
    },
    /// The canvas has zero pixels.
    EmptyCanvas {
        /// Configured canvas height in pixels.
        height: u32,
        /// Configured canvas width in pixels.
        width: u32,
    },
    /// An image-bank operation was requested on a pipeline constructed
    /// without image support.
    ImagesNotConfigured,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageFolderMissing { path, reason } => {
                write!(f, "image folder '{}' cannot be listed: {reason}", path.display())
            }
            Self::ImageFolderEmpty { path } => {
                write!(f, "image folder '{}' contains no files", path.display())
            }
            Self::InvalidRenderMode { mode } => {
                write!(
                    f,
                    "invalid render mode '{mode}' (expected human, rgb_array, state, or none)"
                )
            }
            Self::EmptyGrid { height, width } => {
                write!(f, "grid {height}x{width} has zero cells")
            }
            Self::EmptyCanvas { height, width } => {
                write!(f, "canvas {height}x{width} has zero pixels")
            }
            Self::ImagesNotConfigured => {
                write!(f, "pipeline was constructed without image support")
            }
        }
    }
}

impl Error for ConfigError {}

/// Asset errors: a source image could not be loaded, or no bank exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetError {
    /// The selected image file could not be opened.
    Read {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        reason: String,
    },
    /// The selected file is not decodable as an image.
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// The underlying codec failure.
        reason: String,
    },
    /// A composite was requested before any section bank was built.
    BankNotBuilt,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, reason } => {
                write!(f, "cannot read image '{}': {reason}", path.display())
            }
            Self::Decode { path, reason } => {
                write!(f, "cannot decode image '{}': {reason}", path.display())
            }
            Self::BankNotBuilt => write!(f, "section bank has not been built"),
        }
    }
}

impl Error for AssetError {}

/// Shape errors: a grid, buffer, or bank is inconsistent with the
/// configured dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A grid's shape does not match the configured `(H, W)`.
    GridShapeMismatch {
        /// Configured `(height, width)`.
        expected: (usize, usize),
        /// The offending grid's `(height, width)`.
        actual: (usize, usize),
    },
    /// A cell buffer's length does not match `H*W`.
    CellCountMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Provided number of cells.
        actual: usize,
    },
    /// A grid was constructed with zero cells.
    EmptyGrid {
        /// Requested grid height.
        height: usize,
        /// Requested grid width.
        width: usize,
    },
    /// The section bank's length does not match `H*W`.
    BankLengthMismatch {
        /// Expected bank length (`H*W`).
        expected: usize,
        /// Actual bank length.
        actual: usize,
    },
    /// A caller-allocated output buffer is too small.
    BufferTooSmall {
        /// Required buffer length.
        expected: usize,
        /// Provided buffer length.
        actual: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridShapeMismatch { expected, actual } => write!(
                f,
                "grid shape {}x{} does not match configured {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::EmptyGrid { height, width } => {
                write!(f, "grid {height}x{width} has zero cells")
            }
            Self::BankLengthMismatch { expected, actual } => {
                write!(f, "section bank holds {actual} sections, expected {expected}")
            }
            Self::BufferTooSmall { expected, actual } => {
                write!(f, "output buffer too small: {actual} < {expected}")
            }
        }
    }
}

impl Error for ShapeError {}

/// Per-call encoding errors.
///
/// These fail the offending call only; the grid state and any section
/// bank are left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// A tile value falls outside `[0, N)`. Indicates a corrupted
    /// upstream state; never clamped.
    TileOutOfRange {
        /// Grid row of the offending cell.
        row: usize,
        /// Grid column of the offending cell.
        col: usize,
        /// The out-of-range tile value.
        value: u32,
        /// Number of valid tile values (`N = H*W`).
        tile_count: usize,
    },
    /// A shape inconsistency was detected during encoding.
    Shape(ShapeError),
    /// An asset precondition failed (typically: no bank built yet).
    Asset(AssetError),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileOutOfRange {
                row,
                col,
                value,
                tile_count,
            } => write!(
                f,
                "tile value {value} at cell ({row}, {col}) outside [0, {tile_count})"
            ),
            Self::Shape(e) => write!(f, "shape mismatch: {e}"),
            Self::Asset(e) => write!(f, "asset unavailable: {e}"),
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::Asset(e) => Some(e),
            Self::TileOutOfRange { .. } => None,
        }
    }
}

impl From<ShapeError> for EncodeError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

impl From<AssetError> for EncodeError {
    fn from(e: AssetError) -> Self {
        Self::Asset(e)
    }
}

/// Umbrella error returned by top-level pipeline operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// Construction-time configuration failure.
    Config(ConfigError),
    /// Source image loading failure.
    Asset(AssetError),
    /// Per-call encoding failure.
    Encode(EncodeError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Asset(e) => write!(f, "asset error: {e}"),
            Self::Encode(e) => write!(f, "encoding error: {e}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Asset(e) => Some(e),
            Self::Encode(e) => Some(e),
        }
    }
}

impl From<ConfigError> for PipelineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<AssetError> for PipelineError {
    fn from(e: AssetError) -> Self {
        Self::Asset(e)
    }
}

impl From<EncodeError> for PipelineError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = EncodeError::TileOutOfRange {
            row: 1,
            col: 2,
            value: 99,
            tile_count: 9,
        };
        let msg = e.to_string();
        assert!(msg.contains("99"));
        assert!(msg.contains("(1, 2)"));
        assert!(msg.contains("[0, 9)"));
    }

    #[test]
    fn encode_error_source_chains() {
        let e = EncodeError::Asset(AssetError::BankNotBuilt);
        assert!(e.source().is_some());
        let e = EncodeError::TileOutOfRange {
            row: 0,
            col: 0,
            value: 1,
            tile_count: 1,
        };
        assert!(e.source().is_none());
    }

    #[test]
    fn pipeline_error_wraps_subsystems() {
        let e: PipelineError = ConfigError::ImagesNotConfigured.into();
        assert!(matches!(e, PipelineError::Config(_)));
        let e: PipelineError = AssetError::BankNotBuilt.into();
        assert!(matches!(e, PipelineError::Asset(_)));
        let e: PipelineError = EncodeError::Shape(ShapeError::EmptyGrid {
            height: 0,
            width: 3,
        })
        .into();
        assert!(matches!(e, PipelineError::Encode(_)));
    }
}
