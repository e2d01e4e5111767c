//! Threshold gain of a Fabry–Pérot laser cavity.

use crate::constants::units;
use crate::evaluator::{take_values, ControlSpec, Evaluator, LabError};
use crate::result::{EvaluationResult, Readout};

/// Mirror reflectivities and cavity length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserCavity {
    pub reflectivity_1: f64,
    pub reflectivity_2: f64,
    pub length_cm: f64,
}

impl LaserCavity {
    /// Gain that balances mirror loss, `ln(1/(R1·R2)) / 2ℓ`, in 1/m.
    #[must_use]
    pub fn threshold_gain(&self) -> f64 {
        let length_m = self.length_cm * units::CM;
        (1.0 / (2.0 * length_m)) * (1.0 / (self.reflectivity_1 * self.reflectivity_2)).ln()
    }
}

impl Evaluator for LaserCavity {
    const CONTROLS: &'static [ControlSpec] = &[
        ControlSpec::new("r1", "Mirror 1 Reflectivity", (0.3, 0.99), 0.9, 0.01, ""),
        ControlSpec::new("r2", "Mirror 2 Reflectivity", (0.3, 0.99), 0.8, 0.01, ""),
        ControlSpec::new("length", "Cavity Length (cm)", (0.1, 5.0), 1.0, 0.01, "cm"),
    ];

    fn from_values(values: &[f64]) -> Result<Self, LabError> {
        let [reflectivity_1, reflectivity_2, length_cm] = take_values("laser", values)?;
        Ok(Self {
            reflectivity_1,
            reflectivity_2,
            length_cm,
        })
    }

    fn values(&self) -> Vec<f64> {
        vec![self.reflectivity_1, self.reflectivity_2, self.length_cm]
    }

    fn evaluate(&self) -> EvaluationResult {
        tracing::debug!(
            r1 = self.reflectivity_1,
            r2 = self.reflectivity_2,
            length_cm = self.length_cm,
            "evaluating laser threshold gain"
        );
        EvaluationResult::Scalar(Readout::new(
            "Threshold Gain",
            self.threshold_gain(),
            "1/m",
            2,
        ))
    }
}
