//! Young's double-slit interference.
//!
//! The two-slit fringe pattern on a screen, ignoring the single-slit
//! envelope: `I(x) = cos²(π d x / (λ L))`, already normalised to `[0, 1]`.

use std::f64::consts::PI;

use crate::constants::{units, SCREEN_HALF_WIDTH_M, SCREEN_SAMPLES};
use crate::evaluator::{take_values, ControlSpec, Evaluator, LabError};
use crate::grid::linspace;
use crate::result::{Curve, EvaluationResult};

/// Double-slit parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleSlit {
    pub wavelength_nm: f64,
    pub separation_mm: f64,
    pub screen_distance_m: f64,
}

impl DoubleSlit {
    /// Normalised intensity at screen position `x` (metres).
    #[must_use]
    pub fn intensity_at(&self, x: f64) -> f64 {
        let wl = self.wavelength_nm * units::NM;
        let d = self.separation_mm * units::MM;
        let beta = (PI * d * x) / (wl * self.screen_distance_m);
        beta.cos().powi(2)
    }

    /// Fringe period `λL/d`, in millimetres.
    #[must_use]
    pub fn fringe_spacing_mm(&self) -> f64 {
        let wl = self.wavelength_nm * units::NM;
        let d = self.separation_mm * units::MM;
        wl * self.screen_distance_m / d / units::MM
    }
}

impl Evaluator for DoubleSlit {
    const CONTROLS: &'static [ControlSpec] = &[
        ControlSpec::new("wavelength", "Wavelength (nm)", (400.0, 700.0), 550.0, 1.0, "nm"),
        ControlSpec::new(
            "separation",
            "Slit Separation (mm)",
            (0.1, 2.0),
            0.5,
            0.01,
            "mm",
        ),
        ControlSpec::new(
            "distance",
            "Screen Distance (m)",
            (0.1, 2.0),
            1.0,
            0.01,
            "m",
        ),
    ];

    fn from_values(values: &[f64]) -> Result<Self, LabError> {
        let [wavelength_nm, separation_mm, screen_distance_m] = take_values("double-slit", values)?;
        Ok(Self {
            wavelength_nm,
            separation_mm,
            screen_distance_m,
        })
    }

    fn values(&self) -> Vec<f64> {
        vec![self.wavelength_nm, self.separation_mm, self.screen_distance_m]
    }

    fn evaluate(&self) -> EvaluationResult {
        tracing::debug!(
            wavelength_nm = self.wavelength_nm,
            separation_mm = self.separation_mm,
            screen_distance_m = self.screen_distance_m,
            "evaluating double-slit interference"
        );

        let x = linspace(-SCREEN_HALF_WIDTH_M, SCREEN_HALF_WIDTH_M, SCREEN_SAMPLES);
        let intensity: Vec<f64> = x.iter().map(|&xi| self.intensity_at(xi)).collect();
        let position_mm: Vec<f64> = x.iter().map(|xi| xi * 1000.0).collect();

        EvaluationResult::Curve(Curve::from_samples(
            "Interference Pattern",
            "Position (mm)",
            "Normalized Intensity",
            &position_mm,
            &intensity,
        ))
    }
}
