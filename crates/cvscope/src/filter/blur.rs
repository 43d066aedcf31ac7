use crate::params::{Role, SliderSpec};

/// Label of the horizontal kernel extent slider.
pub const KSIZE_X: &str = "ksize X";
/// Label of the vertical kernel extent slider.
pub const KSIZE_Y: &str = "ksize Y";

pub(crate) static SLIDERS: [SliderSpec; 2] = [
    SliderSpec {
        name: KSIZE_X,
        min: 1,
        max: 25,
        initial: 12,
        role: Role::KernelSize,
    },
    SliderSpec {
        name: KSIZE_Y,
        min: 1,
        max: 25,
        initial: 12,
        role: Role::KernelSize,
    },
];

/// Parameters of the normalized box filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurConfig {
    /// The kernel extent `(x, y)`. Box kernels accept even extents.
    pub ksize: (i32, i32),
}

impl BlurConfig {
    pub(crate) fn from_positions(pos: &[i32; 2]) -> Self {
        Self {
            ksize: (pos[0].max(1), pos[1].max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_keeps_even_extent() {
        let config = BlurConfig::from_positions(&[12, 12]);
        assert_eq!(config.ksize, (12, 12));

        let config = BlurConfig::from_positions(&[0, 3]);
        assert_eq!(config.ksize, (1, 3));
    }
}
