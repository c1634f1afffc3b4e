//! Caller-composed observation transformers.
//!
//! A [`Transformer`] is one encoding capability, selected and composed
//! by the caller. The image variant needs a [`SectionBank`], which the
//! caller (typically [`ObsPipeline`](crate::ObsPipeline)) owns and
//! passes in.

use taquin_core::{AssetError, EncodeError, Frame, Grid};

use crate::bank::SectionBank;
use crate::composite::ImageCompositor;
use crate::normalize::Normalizer;
use crate::onehot::OneHotEncoder;

/// One encoded observation. Transient: no identity beyond the call.
#[derive(Clone, Debug, PartialEq)]
pub enum Observation {
    /// `H*W` floats in `[0, 1]`, row-major.
    Normalized(Vec<f32>),
    /// `N*N` indicator floats, exactly `N` ones.
    OneHot(Vec<f32>),
    /// Composite RGB frame.
    Image(Frame),
}

/// An observation encoding capability.
#[derive(Clone, Debug)]
pub enum Transformer {
    /// Normalized continuous encoding.
    Normalize(Normalizer),
    /// One-hot categorical encoding.
    OneHot(OneHotEncoder),
    /// Image compositing over a section bank.
    ImageComposite(ImageCompositor),
}

impl Transformer {
    /// Encode a grid. `bank` is only consulted by
    /// [`Transformer::ImageComposite`].
    ///
    /// # Errors
    ///
    /// The underlying encoder's errors, plus
    /// [`AssetError::BankNotBuilt`] (wrapped in [`EncodeError::Asset`])
    /// when the image variant is used without a bank.
    pub fn encode(
        &self,
        grid: &Grid,
        bank: Option<&SectionBank>,
    ) -> Result<Observation, EncodeError> {
        match self {
            Self::Normalize(encoder) => encoder.encode(grid).map(Observation::Normalized),
            Self::OneHot(encoder) => encoder.encode(grid).map(Observation::OneHot),
            Self::ImageComposite(compositor) => {
                let bank = bank.ok_or(EncodeError::Asset(AssetError::BankNotBuilt))?;
                compositor.encode(grid, bank).map(Observation::Image)
            }
        }
    }

    /// Shape of this transformer's observation, for pre-allocation.
    pub fn obs_shape(&self) -> Vec<usize> {
        match self {
            Self::Normalize(encoder) => vec![encoder.obs_len()],
            Self::OneHot(encoder) => vec![encoder.obs_len()],
            Self::ImageComposite(compositor) => compositor.obs_shape().to_vec(),
        }
    }

    /// Total number of scalar elements in the observation.
    pub fn obs_len(&self) -> usize {
        self.obs_shape().iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_onehot_ignore_bank() {
        let grid = Grid::solved(2, 2);
        let t = Transformer::Normalize(Normalizer::new(2, 2));
        assert!(matches!(
            t.encode(&grid, None).unwrap(),
            Observation::Normalized(_)
        ));
        let t = Transformer::OneHot(OneHotEncoder::new(2, 2));
        assert!(matches!(
            t.encode(&grid, None).unwrap(),
            Observation::OneHot(_)
        ));
    }

    #[test]
    fn image_without_bank_is_asset_error() {
        let grid = Grid::solved(2, 2);
        let t = Transformer::ImageComposite(ImageCompositor::new(2, 2, 8, 8));
        let err = t.encode(&grid, None).unwrap_err();
        assert_eq!(err, EncodeError::Asset(AssetError::BankNotBuilt));
    }

    #[test]
    fn obs_shapes() {
        assert_eq!(
            Transformer::Normalize(Normalizer::new(3, 3)).obs_shape(),
            vec![9]
        );
        assert_eq!(
            Transformer::OneHot(OneHotEncoder::new(3, 3)).obs_len(),
            81
        );
        assert_eq!(
            Transformer::ImageComposite(ImageCompositor::new(3, 3, 90, 60)).obs_shape(),
            vec![90, 60, 3]
        );
    }
}
