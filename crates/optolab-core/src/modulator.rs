//! Pockels-cell intensity modulator between crossed polarisers.

use std::f64::consts::PI;

use crate::evaluator::{take_values, ControlSpec, Evaluator, LabError};
use crate::result::{EvaluationResult, Readout};

/// Drive voltage and half-wave voltage of the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectroOpticModulator {
    pub voltage_v: f64,
    pub half_wave_voltage_v: f64,
}

impl ElectroOpticModulator {
    /// Normalised transmission `sin²(πV / 2Vπ)`.
    #[must_use]
    pub fn transmission(&self) -> f64 {
        ((PI * self.voltage_v) / (2.0 * self.half_wave_voltage_v))
            .sin()
            .powi(2)
    }
}

impl Evaluator for ElectroOpticModulator {
    const CONTROLS: &'static [ControlSpec] = &[
        ControlSpec::new("voltage", "Applied Voltage (V)", (0.0, 500.0), 100.0, 1.0, "V"),
        ControlSpec::new(
            "vpi",
            "Half-Wave Voltage Vπ (V)",
            (50.0, 400.0),
            200.0,
            1.0,
            "V",
        ),
    ];

    fn from_values(values: &[f64]) -> Result<Self, LabError> {
        let [voltage_v, half_wave_voltage_v] = take_values("modulator", values)?;
        Ok(Self {
            voltage_v,
            half_wave_voltage_v,
        })
    }

    fn values(&self) -> Vec<f64> {
        vec![self.voltage_v, self.half_wave_voltage_v]
    }

    fn evaluate(&self) -> EvaluationResult {
        tracing::debug!(
            voltage_v = self.voltage_v,
            half_wave_voltage_v = self.half_wave_voltage_v,
            "evaluating electro-optic modulator"
        );
        EvaluationResult::Scalar(Readout::new(
            "Output Intensity (Normalized)",
            self.transmission(),
            "",
            3,
        ))
    }
}
