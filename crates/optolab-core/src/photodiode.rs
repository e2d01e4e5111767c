//! Illuminated photodiode current–voltage characteristic.
//!
//! Ideal Shockley diode shifted down by the photocurrent:
//! `I(V) = Is (exp(qV / kT) − 1) − IL`.

use crate::constants::{
    units, BIAS_LIMIT_V, BIAS_SAMPLES, BOLTZMANN, CELSIUS_TO_KELVIN, ELEMENTARY_CHARGE,
};
use crate::evaluator::{take_values, ControlSpec, Evaluator, LabError};
use crate::grid::linspace;
use crate::result::{Curve, EvaluationResult};

/// Photodiode parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Photodiode {
    pub saturation_ua: f64,
    pub illumination_ua: f64,
    pub temperature_c: f64,
}

impl Photodiode {
    /// Junction temperature in kelvin.
    #[must_use]
    pub fn temperature_k(&self) -> f64 {
        self.temperature_c + CELSIUS_TO_KELVIN
    }

    /// Thermal voltage `kT/q`, in volts.
    #[must_use]
    pub fn thermal_voltage(&self) -> f64 {
        BOLTZMANN * self.temperature_k() / ELEMENTARY_CHARGE
    }

    /// Diode current at bias `v` volts, in amps.
    #[must_use]
    pub fn current_at(&self, v: f64) -> f64 {
        let is = self.saturation_ua * units::UA;
        let il = self.illumination_ua * units::UA;
        let kt = BOLTZMANN * self.temperature_k();
        is * (((ELEMENTARY_CHARGE * v) / kt).exp() - 1.0) - il
    }

    /// Forward bias at which the photocurrent is cancelled, in volts.
    #[must_use]
    pub fn open_circuit_voltage(&self) -> f64 {
        self.thermal_voltage() * (self.illumination_ua / self.saturation_ua).ln_1p()
    }
}

impl Evaluator for Photodiode {
    const CONTROLS: &'static [ControlSpec] = &[
        ControlSpec::new(
            "saturation",
            "Saturation Current (µA)",
            (0.1, 10.0),
            1.0,
            0.01,
            "µA",
        ),
        ControlSpec::new(
            "illumination",
            "Illumination Current (µA)",
            (0.0, 50.0),
            10.0,
            0.01,
            "µA",
        ),
        ControlSpec::new("temperature", "Temperature (°C)", (0.0, 80.0), 27.0, 1.0, "°C"),
    ];

    fn from_values(values: &[f64]) -> Result<Self, LabError> {
        let [saturation_ua, illumination_ua, temperature_c] = take_values("photodiode", values)?;
        Ok(Self {
            saturation_ua,
            illumination_ua,
            temperature_c,
        })
    }

    fn values(&self) -> Vec<f64> {
        vec![self.saturation_ua, self.illumination_ua, self.temperature_c]
    }

    fn evaluate(&self) -> EvaluationResult {
        tracing::debug!(
            saturation_ua = self.saturation_ua,
            illumination_ua = self.illumination_ua,
            temperature_c = self.temperature_c,
            "evaluating photodiode I-V curve"
        );

        let bias = linspace(-BIAS_LIMIT_V, BIAS_LIMIT_V, BIAS_SAMPLES);
        let current_ua: Vec<f64> = bias
            .iter()
            .map(|&v| self.current_at(v) / units::UA)
            .collect();

        EvaluationResult::Curve(Curve::from_samples(
            "Photodiode I–V Curve",
            "Voltage (V)",
            "Current (µA)",
            &bias,
            &current_ua,
        ))
    }
}
