//! Malus' law for an ideal analyser.

use crate::constants::INCIDENT_INTENSITY;
use crate::evaluator::{take_values, ControlSpec, Evaluator, LabError};
use crate::result::{EvaluationResult, Readout};

/// Analyser angle relative to the incident polarisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarizer {
    pub angle_deg: f64,
}

impl Polarizer {
    /// `I₀ cos²θ` with `I₀` = [`INCIDENT_INTENSITY`].
    #[must_use]
    pub fn transmitted_intensity(&self) -> f64 {
        let theta = self.angle_deg.to_radians();
        INCIDENT_INTENSITY * theta.cos().powi(2)
    }
}

impl Evaluator for Polarizer {
    const CONTROLS: &'static [ControlSpec] = &[ControlSpec::new(
        "angle",
        "Angle (degrees)",
        (0.0, 180.0),
        45.0,
        1.0,
        "°",
    )];

    fn from_values(values: &[f64]) -> Result<Self, LabError> {
        let [angle_deg] = take_values("polarization", values)?;
        Ok(Self { angle_deg })
    }

    fn values(&self) -> Vec<f64> {
        vec![self.angle_deg]
    }

    fn evaluate(&self) -> EvaluationResult {
        tracing::debug!(angle_deg = self.angle_deg, "evaluating Malus' law");
        EvaluationResult::Scalar(Readout::new(
            "Transmitted Intensity",
            self.transmitted_intensity(),
            "",
            2,
        ))
    }
}
