use crate::{
    options::BorderMode,
    params::{Role, SliderSpec},
    validate::gradient_exclusive,
};

/// Label of the x derivative order slider.
pub const DX: &str = "dx";
/// Label of the y derivative order slider.
pub const DY: &str = "dy";
/// Label of the scale slider.
pub const SCALE: &str = "scale";
/// Label of the delta slider.
pub const DELTA: &str = "delta";

pub(crate) static SLIDERS: [SliderSpec; 4] = [
    SliderSpec {
        name: DX,
        min: 0,
        max: 1,
        initial: 1,
        role: Role::Order,
    },
    SliderSpec {
        name: DY,
        min: 0,
        max: 1,
        initial: 0,
        role: Role::Order,
    },
    SliderSpec {
        name: SCALE,
        min: 0,
        max: 60,
        initial: 0,
        role: Role::Scale,
    },
    SliderSpec {
        name: DELTA,
        min: 0,
        max: 60,
        initial: 0,
        role: Role::Delta,
    },
];

/// Parameters of the Scharr gradient.
///
/// Exactly one of `dx` and `dy` is 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScharrConfig {
    /// The x derivative order.
    pub dx: i32,
    /// The y derivative order.
    pub dy: i32,
    /// The scale factor applied to the derivative.
    pub scale: f64,
    /// The value added to the scaled derivative.
    pub delta: f64,
    /// The border handling mode.
    pub border: BorderMode,
}

pub(crate) fn correct(pos: &[i32; 4]) -> [i32; 4] {
    let (dx, dy) = gradient_exclusive(pos[0], pos[1]);
    [dx, dy, pos[2], pos[3]]
}

impl ScharrConfig {
    pub(crate) fn from_positions(pos: &[i32; 4], option: usize) -> Self {
        Self {
            dx: pos[0],
            dy: pos[1],
            scale: pos[2] as f64,
            delta: pos[3] as f64,
            border: BorderMode::from_index(option),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_orders() {
        assert_eq!(correct(&[1, 1, 3, 4]), [1, 0, 3, 4]);
        assert_eq!(correct(&[0, 0, 0, 0]), [0, 1, 0, 0]);
        assert_eq!(correct(&[0, 1, 0, 0]), [0, 1, 0, 0]);
    }

    #[test]
    fn test_config() {
        let config = ScharrConfig::from_positions(&[0, 1, 2, 9], 3);
        assert_eq!((config.dx, config.dy), (0, 1));
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.delta, 9.0);
        assert_eq!(config.border, BorderMode::Reflect101);
    }
}
