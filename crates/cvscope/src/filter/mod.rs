//! The four explorable filters.
//!
//! Each filter contributes its slider table, a pure correction rule over raw
//! slider positions and a typed configuration built from the corrected
//! positions. [`FilterKind`] dispatches to them.

/// Normalized box filter.
pub mod blur;

/// Morphological erosion.
pub mod erode;

/// Gaussian blur.
pub mod gaussian;

/// Scharr gradient.
pub mod scharr;

pub use blur::BlurConfig;
pub use erode::ErodeConfig;
pub use gaussian::GaussianBlurConfig;
pub use scharr::ScharrConfig;

use crate::{
    options::{OptionEntry, OptionTable, BORDER_MODES, MORPH_SHAPES},
    params::SliderSpec,
};

/// Suffix shared by every window title.
const TITLE_SUFFIX: &str = "CVscope";

/// The filter explored by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Normalized box filter.
    Blur,
    /// Morphological erosion with a selectable structuring element.
    Erode,
    /// Gaussian blur with a selectable border mode.
    GaussianBlur,
    /// Scharr gradient with a selectable border mode.
    Scharr,
}

impl FilterKind {
    /// Returns the display name of the filter.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Blur => "Blur",
            FilterKind::Erode => "Erode",
            FilterKind::GaussianBlur => "Gaussian Blur",
            FilterKind::Scharr => "Scharr",
        }
    }

    /// Returns the sliders of the filter in creation order.
    pub fn sliders(self) -> &'static [SliderSpec] {
        match self {
            FilterKind::Blur | FilterKind::Erode => &blur::SLIDERS,
            FilterKind::GaussianBlur => &gaussian::SLIDERS,
            FilterKind::Scharr => &scharr::SLIDERS,
        }
    }

    /// Returns the discrete options the operator can page through, if any.
    pub fn options(self) -> Option<&'static OptionTable> {
        match self {
            FilterKind::Blur => None,
            FilterKind::Erode => Some(&MORPH_SHAPES),
            FilterKind::GaussianBlur | FilterKind::Scharr => Some(&BORDER_MODES),
        }
    }

    /// Maps raw slider positions to corrected positions, one per slider.
    ///
    /// Positions a rule does not touch are returned unchanged.
    pub(crate) fn correct(self, raw: &[i32]) -> Vec<i32> {
        match self {
            FilterKind::Blur | FilterKind::Erode => self.fixed::<2>(raw).to_vec(),
            FilterKind::GaussianBlur => gaussian::correct(&self.fixed(raw)).to_vec(),
            FilterKind::Scharr => scharr::correct(&self.fixed(raw)).to_vec(),
        }
    }

    /// Builds the configuration from corrected positions and an option index.
    pub(crate) fn config(self, positions: &[i32], option: usize) -> FilterConfig {
        match self {
            FilterKind::Blur => FilterConfig::Blur(BlurConfig::from_positions(&self.fixed(positions))),
            FilterKind::Erode => {
                FilterConfig::Erode(ErodeConfig::from_positions(&self.fixed(positions), option))
            }
            FilterKind::GaussianBlur => FilterConfig::GaussianBlur(
                GaussianBlurConfig::from_positions(&self.fixed(positions), option),
            ),
            FilterKind::Scharr => {
                FilterConfig::Scharr(ScharrConfig::from_positions(&self.fixed(positions), option))
            }
        }
    }

    /// Copies `positions` into one entry per slider.
    ///
    /// Missing trailing positions take the slider's initial value and extra
    /// positions are dropped.
    fn fixed<const N: usize>(self, positions: &[i32]) -> [i32; N] {
        let sliders = self.sliders();
        std::array::from_fn(|i| {
            positions
                .get(i)
                .copied()
                .or_else(|| sliders.get(i).map(|s| s.initial))
                .unwrap_or(0)
        })
    }

    /// Returns the window title for the selected option.
    pub fn title(self, option: Option<&OptionEntry>) -> String {
        match option {
            Some(entry) => format!("{} - {} - {}", self.name(), entry.description, TITLE_SUFFIX),
            None => format!("{} - {}", self.name(), TITLE_SUFFIX),
        }
    }
}

/// A validated filter configuration, recomputed every iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterConfig {
    /// Box filter parameters.
    Blur(BlurConfig),
    /// Erosion parameters.
    Erode(ErodeConfig),
    /// Gaussian blur parameters.
    GaussianBlur(GaussianBlurConfig),
    /// Scharr gradient parameters.
    Scharr(ScharrConfig),
}

impl FilterConfig {
    /// Returns the filter this configuration belongs to.
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterConfig::Blur(_) => FilterKind::Blur,
            FilterConfig::Erode(_) => FilterKind::Erode,
            FilterConfig::GaussianBlur(_) => FilterKind::GaussianBlur,
            FilterConfig::Scharr(_) => FilterKind::Scharr,
        }
    }

    /// Returns the selected discrete option, if the filter has one.
    pub fn option(&self) -> Option<&'static OptionEntry> {
        match self {
            FilterConfig::Blur(_) => None,
            FilterConfig::Erode(c) => Some(c.shape.entry()),
            FilterConfig::GaussianBlur(c) => Some(c.border.entry()),
            FilterConfig::Scharr(c) => Some(c.border.entry()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(FilterKind::Blur.title(None), "Blur - CVscope");
        assert_eq!(
            FilterKind::Erode.title(Some(MORPH_SHAPES.entry(1))),
            "Erode - Cross - CVscope"
        );
        assert_eq!(
            FilterKind::Scharr.title(Some(BORDER_MODES.entry(0))),
            "Scharr - Border Constant - CVscope"
        );
    }

    #[test]
    fn test_config_kind_round_trip() {
        for kind in [
            FilterKind::Blur,
            FilterKind::Erode,
            FilterKind::GaussianBlur,
            FilterKind::Scharr,
        ] {
            let initial: Vec<i32> = kind.sliders().iter().map(|s| s.initial).collect();
            let config = kind.config(&kind.correct(&initial), 0);
            assert_eq!(config.kind(), kind);
            assert_eq!(config.option().is_some(), kind.options().is_some());
        }
    }

    #[test]
    fn test_position_count_mismatch() {
        // short input is completed with the initial slider positions
        assert_eq!(FilterKind::Scharr.correct(&[1, 1]), vec![1, 0, 0, 0]);
        assert_eq!(FilterKind::Blur.correct(&[]), vec![12, 12]);

        match FilterKind::GaussianBlur.config(&[3], 0) {
            FilterConfig::GaussianBlur(c) => {
                assert_eq!(c.ksize, (3, 1));
                assert_eq!(c.sigma, (30.0, 0.0));
            }
            other => panic!("unexpected config {other:?}"),
        }

        // extra positions are ignored
        assert_eq!(FilterKind::Erode.correct(&[5, 7, 9]), vec![5, 7]);
        match FilterKind::Blur.config(&[5, 7, 9], 0) {
            FilterConfig::Blur(c) => assert_eq!(c.ksize, (5, 7)),
            other => panic!("unexpected config {other:?}"),
        }
    }

    #[test]
    fn test_correct_keeps_length() {
        assert_eq!(FilterKind::Blur.correct(&[3, 4]), vec![3, 4]);
        assert_eq!(FilterKind::GaussianBlur.correct(&[0, 0, 0, 0]).len(), 4);
        assert_eq!(FilterKind::Scharr.correct(&[1, 1, 0, 0]), vec![1, 0, 0, 0]);
    }
}
