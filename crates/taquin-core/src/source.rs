//! Interface to the external puzzle simulation.
//!
//! The simulation owns the grid state, the render mode, and the display
//! surface. The pipeline consumes exactly these and never reaches into
//! simulation internals.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::frame::Frame;
use crate::grid::Grid;

/// Render mode requested by the external simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Composite a frame and draw it onto the display surface.
    Human,
    /// Composite a frame and return it to the caller.
    RgbArray,
    /// Return the raw grid state unchanged.
    State,
    /// Rendering disabled.
    Disabled,
}

impl RenderMode {
    /// The canonical mode string (`human`, `rgb_array`, `state`, `none`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::RgbArray => "rgb_array",
            Self::State => "state",
            Self::Disabled => "none",
        }
    }
}

impl FromStr for RenderMode {
    type Err = ConfigError;

    /// Parse a mode string. Unrecognized values are a configuration
    /// error, rejected here rather than at render time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "rgb_array" => Ok(Self::RgbArray),
            "state" => Ok(Self::State),
            "none" => Ok(Self::Disabled),
            other => Err(ConfigError::InvalidRenderMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Read-only view of the external puzzle simulation.
///
/// Grid dimensions are fixed for the lifetime of a pipeline; `state`
/// returns a snapshot of the current grid. Implementations never have
/// their state mutated by this workspace.
pub trait GridStateSource {
    /// Grid height in cells. Positive, fixed.
    fn grid_height(&self) -> usize;

    /// Grid width in cells. Positive, fixed.
    fn grid_width(&self) -> usize;

    /// Snapshot of the current grid state.
    fn state(&self) -> Grid;

    /// The render mode the simulation was configured with.
    fn render_mode(&self) -> RenderMode;

    /// The simulation's display surface, if it has one. Only consulted
    /// in [`RenderMode::Human`]; headless simulations return `None`.
    fn surface(&mut self) -> Option<&mut dyn DisplaySurface> {
        None
    }
}

/// Rendering surface owned by the external simulation.
///
/// Single-writer: only the pipeline's `human`-mode render path touches it.
pub trait DisplaySurface {
    /// Draw a composite frame onto the surface.
    fn draw(&mut self, frame: &Frame);

    /// Flush pending draws to the display.
    fn flush(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in [
            RenderMode::Human,
            RenderMode::RgbArray,
            RenderMode::State,
            RenderMode::Disabled,
        ] {
            assert_eq!(mode.as_str().parse::<RenderMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_is_config_error() {
        let err = "ansi".parse::<RenderMode>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidRenderMode {
                mode: "ansi".to_string()
            }
        );
    }
}
