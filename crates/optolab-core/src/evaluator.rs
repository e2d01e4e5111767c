//! Evaluator trait, slider controls, and the lab error type.
//!
//! `Evaluator` is implemented by each experiment's parameter record.
//! `ControlSpec` describes one bounded slider feeding that record.

use crate::result::EvaluationResult;

/// Error type for the lab.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LabError {
    /// The experiment identifier is not one of the seven known experiments.
    #[error("unknown experiment: {0}")]
    UnknownExperiment(String),

    /// A control value lies outside its slider bounds, or is not finite.
    #[error("{control} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        control: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Wrong number of control values for an experiment.
    #[error("{experiment} takes {expected} values, got {got}")]
    ParameterCount {
        experiment: &'static str,
        expected: usize,
        got: usize,
    },

    /// The presentation layer failed to draw a result.
    #[error("render error: {0}")]
    Render(String),
}

/// One bounded slider: label, range, default, granularity, and unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    /// Flag and lookup key, e.g. `wavelength`.
    pub key: &'static str,
    /// Human label, e.g. `Wavelength (nm)`.
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// Slider granularity; 1 for integer sliders.
    pub step: f64,
    pub unit: &'static str,
}

impl ControlSpec {
    #[must_use]
    pub const fn new(
        key: &'static str,
        label: &'static str,
        range: (f64, f64),
        default: f64,
        step: f64,
        unit: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            min: range.0,
            max: range.1,
            default,
            step,
            unit,
        }
    }

    /// Whether `value` is finite and within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Return `value` unchanged if it is in range.
    pub fn check(&self, value: f64) -> Result<f64, LabError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(LabError::OutOfRange {
                control: self.key,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Round to the slider granularity and clamp into range.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        let snapped = (value / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }

    /// Move `steps` slider notches from `value`, staying in range.
    #[must_use]
    pub fn nudge(&self, value: f64, steps: i32) -> f64 {
        self.snap(value + f64::from(steps) * self.step)
    }

    /// Whether the slider only takes whole numbers.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        (self.step - 1.0).abs() < f64::EPSILON
    }

    /// Decimals needed to show a value at this granularity.
    #[must_use]
    pub fn decimals(&self) -> usize {
        if self.is_integer() {
            0
        } else {
            2
        }
    }
}

/// A parameter record that evaluates one formula.
pub trait Evaluator: Sized {
    /// Slider controls in display order; `values()` follows the same order.
    const CONTROLS: &'static [ControlSpec];

    /// Build the record from control values in `CONTROLS` order.
    ///
    /// Only the count is checked; call [`Evaluator::validate`] for ranges.
    fn from_values(values: &[f64]) -> Result<Self, LabError>;

    /// Control values in `CONTROLS` order.
    fn values(&self) -> Vec<f64>;

    /// Evaluate the formula.
    fn evaluate(&self) -> EvaluationResult;

    /// Check every control value against its bounds.
    fn validate(&self) -> Result<(), LabError> {
        for (spec, value) in Self::CONTROLS.iter().zip(self.values()) {
            spec.check(value)?;
        }
        Ok(())
    }

    /// The record with every control at its default.
    fn defaults() -> Self {
        let values: Vec<f64> = Self::CONTROLS.iter().map(|c| c.default).collect();
        match Self::from_values(&values) {
            Ok(params) => params,
            Err(e) => unreachable!("CONTROLS and from_values disagree: {e}"),
        }
    }
}

/// Destructure `values` into exactly `N` control values.
pub(crate) fn take_values<const N: usize>(
    experiment: &'static str,
    values: &[f64],
) -> Result<[f64; N], LabError> {
    values
        .try_into()
        .map_err(|_| LabError::ParameterCount {
            experiment,
            expected: N,
            got: values.len(),
        })
}
