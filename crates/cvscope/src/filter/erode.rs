use crate::options::MorphShape;

pub use super::blur::{KSIZE_X, KSIZE_Y};

/// Parameters of the morphological erosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErodeConfig {
    /// The structuring element shape.
    pub shape: MorphShape,
    /// The structuring element extent `(x, y)`.
    pub ksize: (i32, i32),
}

impl ErodeConfig {
    pub(crate) fn from_positions(pos: &[i32; 2], option: usize) -> Self {
        Self {
            shape: MorphShape::from_index(option),
            ksize: (pos[0].max(1), pos[1].max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erode_config() {
        let config = ErodeConfig::from_positions(&[12, 5], 2);
        assert_eq!(config.shape, MorphShape::Ellipse);
        assert_eq!(config.ksize, (12, 5));

        let config = ErodeConfig::from_positions(&[0, 25], 3);
        assert_eq!(config.shape, MorphShape::Rect);
        assert_eq!(config.ksize, (1, 25));
    }
}
