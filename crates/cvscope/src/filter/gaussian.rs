use crate::{
    options::BorderMode,
    params::{Role, SliderSpec},
    validate::{ensure_odd, gaussian_kernel_fallback},
};

/// Label of the horizontal kernel extent slider.
pub const KSIZE_X: &str = "ksize X";
/// Label of the vertical kernel extent slider.
pub const KSIZE_Y: &str = "ksize Y";
/// Label of the horizontal sigma slider.
pub const SIGMA_X: &str = "sigma X";
/// Label of the vertical sigma slider.
pub const SIGMA_Y: &str = "sigma Y";

pub(crate) static SLIDERS: [SliderSpec; 4] = [
    SliderSpec {
        name: KSIZE_X,
        min: 0,
        max: 25,
        initial: 0,
        role: Role::KernelSize,
    },
    SliderSpec {
        name: KSIZE_Y,
        min: 0,
        max: 25,
        initial: 0,
        role: Role::KernelSize,
    },
    SliderSpec {
        name: SIGMA_X,
        min: 0,
        max: 60,
        initial: 30,
        role: Role::Sigma,
    },
    SliderSpec {
        name: SIGMA_Y,
        min: 0,
        max: 60,
        initial: 0,
        role: Role::Sigma,
    },
];

/// Parameters of the gaussian blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBlurConfig {
    /// The odd kernel extent `(x, y)`.
    pub ksize: (i32, i32),
    /// The standard deviations `(x, y)`.
    pub sigma: (f64, f64),
    /// The border handling mode.
    pub border: BorderMode,
}

/// Forces a zero kernel axis to 1 while sigma x is zero.
pub(crate) fn correct(pos: &[i32; 4]) -> [i32; 4] {
    let (kx, ky) = gaussian_kernel_fallback(pos[2], (pos[0], pos[1]));
    [kx, ky, pos[2], pos[3]]
}

impl GaussianBlurConfig {
    pub(crate) fn from_positions(pos: &[i32; 4], option: usize) -> Self {
        Self {
            ksize: (ensure_odd(pos[0]), ensure_odd(pos[1])),
            sigma: (pos[2] as f64, pos[3] as f64),
            border: BorderMode::from_index(option),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_correct_zero_sigma() {
        assert_eq!(correct(&[0, 0, 0, 0]), [1, 1, 0, 0]);
        assert_eq!(correct(&[0, 6, 0, 12]), [1, 6, 0, 12]);
        assert_eq!(correct(&[0, 0, 30, 0]), [0, 0, 30, 0]);
    }

    #[test]
    fn test_config_odd_kernel() {
        let config = GaussianBlurConfig::from_positions(&[4, 0, 30, 7], 1);
        assert_eq!(config.ksize, (5, 1));
        assert_relative_eq!(config.sigma.0, 30.0);
        assert_relative_eq!(config.sigma.1, 7.0);
        assert_eq!(config.border, BorderMode::Replicate);
    }
}
