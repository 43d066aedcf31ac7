//! Slider-backed numeric parameters.

use crate::{
    backend::Window,
    error::ScopeError,
    filter::{FilterConfig, FilterKind},
};

/// What a parameter controls in its filter.
///
/// Correction rules are selected by [`FilterKind`]; the role is descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// One axis of a kernel extent.
    KernelSize,
    /// A gaussian standard deviation.
    Sigma,
    /// A multiplier applied to the filter response.
    Scale,
    /// An offset added to the filter response.
    Delta,
    /// A derivative order along one axis.
    Order,
}

/// Static description of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSpec {
    /// The trackbar label, also used as its key in the window.
    pub name: &'static str,
    /// The lowest position.
    pub min: i32,
    /// The highest position.
    pub max: i32,
    /// The position at session start.
    pub initial: i32,
    /// What the slider controls.
    pub role: Role,
}

/// A parameter backed by one slider.
#[derive(Debug, Clone)]
pub struct Parameter {
    spec: &'static SliderSpec,
    value: i32,
    forced: bool,
}

impl Parameter {
    fn new(spec: &'static SliderSpec) -> Self {
        Self {
            spec,
            value: spec.initial.clamp(spec.min, spec.max),
            forced: false,
        }
    }

    /// Returns the slider label.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Returns the current position.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the slider range as `(min, max)`.
    #[inline]
    pub fn range(&self) -> (i32, i32) {
        (self.spec.min, self.spec.max)
    }

    /// Returns what the parameter controls.
    #[inline]
    pub fn role(&self) -> Role {
        self.spec.role
    }

    fn set(&mut self, value: i32) {
        self.value = value.clamp(self.spec.min, self.spec.max);
    }
}

/// The parameters of one filter session.
///
/// The store mirrors the window trackbars: [`ParameterStore::pull`] reads the
/// operator's positions, [`ParameterStore::resolve`] applies the filter rules
/// and [`ParameterStore::push`] writes back only the positions a rule forced.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    kind: FilterKind,
    params: Vec<Parameter>,
}

impl ParameterStore {
    /// Creates a store with the filter's initial slider positions.
    pub fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            params: kind.sliders().iter().map(Parameter::new).collect(),
        }
    }

    /// Returns the filter the store validates for.
    #[inline]
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Returns the parameters in slider order.
    #[inline]
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// Returns the position of the slider called `name`.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.params
            .iter()
            .find(|p| p.name() == name)
            .map(Parameter::value)
    }

    /// Moves the slider called `name`, clamped to its range.
    ///
    /// Returns false when no slider has that name.
    pub fn set(&mut self, name: &str, value: i32) -> bool {
        match self.params.iter_mut().find(|p| p.name() == name) {
            Some(param) => {
                param.set(value);
                true
            }
            None => false,
        }
    }

    /// Returns the current positions in slider order.
    pub fn positions(&self) -> Vec<i32> {
        self.params.iter().map(Parameter::value).collect()
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        self.params.iter().any(|p| p.forced)
    }

    /// Corrects the current positions and builds the filter configuration.
    ///
    /// # Arguments
    ///
    /// * `option` - The index into the filter's option table, ignored by filters without one.
    pub fn resolve(&mut self, option: usize) -> FilterConfig {
        let raw = self.positions();
        let corrected = self.kind.correct(&raw);

        for (param, (&before, &after)) in self.params.iter_mut().zip(raw.iter().zip(&corrected)) {
            if before != after {
                log::debug!(
                    "forcing {:?} slider '{}' from {} to {}",
                    param.role(),
                    param.name(),
                    before,
                    after
                );
                param.set(after);
                param.forced = true;
            }
        }

        self.kind.config(&self.positions(), option)
    }

    /// Creates one trackbar per parameter at its initial position.
    pub fn install<W: Window>(&self, window: &mut W) -> Result<(), ScopeError> {
        for param in &self.params {
            let (min, max) = param.range();
            window.create_trackbar(param.name(), max)?;
            if min > 0 {
                window.set_trackbar_min(param.name(), min)?;
            }
            window.set_trackbar_pos(param.name(), param.value())?;
        }
        Ok(())
    }

    /// Reads the trackbar positions from the window.
    pub fn pull<W: Window>(&mut self, window: &W) -> Result<(), ScopeError> {
        for param in self.params.iter_mut() {
            let pos = window.trackbar_pos(param.name())?;
            param.set(pos);
        }
        Ok(())
    }

    /// Writes forced corrections back to the window trackbars.
    pub fn push<W: Window>(&mut self, window: &mut W) -> Result<(), ScopeError> {
        for param in self.params.iter_mut().filter(|p| p.forced) {
            window.set_trackbar_pos(param.name(), param.value)?;
            param.forced = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{gaussian, scharr};

    #[test]
    fn test_initial_positions() {
        let store = ParameterStore::new(FilterKind::Blur);
        assert_eq!(store.positions(), vec![12, 12]);

        let store = ParameterStore::new(FilterKind::GaussianBlur);
        assert_eq!(store.positions(), vec![0, 0, 30, 0]);

        let store = ParameterStore::new(FilterKind::Scharr);
        assert_eq!(store.positions(), vec![1, 0, 0, 0]);
        assert_eq!(store.parameters()[0].role(), Role::Order);
    }

    #[test]
    fn test_set_clamps_to_range() {
        let mut store = ParameterStore::new(FilterKind::Erode);
        assert!(store.set("ksize X", 40));
        assert_eq!(store.get("ksize X"), Some(25));
        assert!(store.set("ksize Y", 0));
        assert_eq!(store.get("ksize Y"), Some(1));
        assert!(!store.set("sigma X", 3));
        assert_eq!(store.get("sigma X"), None);
    }

    #[test]
    fn test_resolve_forces_gaussian_axes() {
        let mut store = ParameterStore::new(FilterKind::GaussianBlur);
        store.set(gaussian::SIGMA_X, 0);

        let config = store.resolve(0);
        assert!(store.has_pending());
        assert_eq!(store.get(gaussian::KSIZE_X), Some(1));
        assert_eq!(store.get(gaussian::KSIZE_Y), Some(1));
        assert_eq!(store.get(gaussian::SIGMA_X), Some(0));

        match config {
            FilterConfig::GaussianBlur(c) => assert_eq!(c.ksize, (1, 1)),
            other => panic!("unexpected config {other:?}"),
        }
    }

    #[test]
    fn test_resolve_without_correction_keeps_pending_clear() {
        let mut store = ParameterStore::new(FilterKind::Scharr);
        store.resolve(0);
        assert!(!store.has_pending());

        store.set(scharr::DY, 1);
        store.resolve(0);
        assert!(store.has_pending());
        assert_eq!(store.get(scharr::DX), Some(1));
        assert_eq!(store.get(scharr::DY), Some(0));
    }
}
