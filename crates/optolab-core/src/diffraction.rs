//! Single-slit Fraunhofer diffraction.

use std::f64::consts::PI;

use crate::constants::{units, SCREEN_HALF_WIDTH_M, SCREEN_SAMPLES, SINGULARITY_EPSILON};
use crate::evaluator::{take_values, ControlSpec, Evaluator, LabError};
use crate::grid::linspace;
use crate::result::{Curve, EvaluationResult};

/// Single-slit parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleSlit {
    pub wavelength_nm: f64,
    pub slit_width_mm: f64,
    pub screen_distance_m: f64,
}

/// `(sin α / (α + ε))²` with ε = [`SINGULARITY_EPSILON`].
///
/// The epsilon keeps α = 0 from dividing by zero; it reads 0 there
/// rather than the analytic limit of 1. The even screen grid never
/// lands on α = 0, so plotted patterns are unaffected.
#[must_use]
pub fn sinc_squared(alpha: f64) -> f64 {
    (alpha.sin() / (alpha + SINGULARITY_EPSILON)).powi(2)
}

impl SingleSlit {
    /// Normalised intensity at screen position `x` (metres).
    #[must_use]
    pub fn intensity_at(&self, x: f64) -> f64 {
        let wl = self.wavelength_nm * units::NM;
        let a = self.slit_width_mm * units::MM;
        let alpha = (PI * a * x) / (wl * self.screen_distance_m);
        sinc_squared(alpha)
    }

    /// Distance between the two first minima, `2λL/a`, in millimetres.
    #[must_use]
    pub fn central_maximum_width_mm(&self) -> f64 {
        let wl = self.wavelength_nm * units::NM;
        let a = self.slit_width_mm * units::MM;
        2.0 * wl * self.screen_distance_m / a / units::MM
    }
}

impl Evaluator for SingleSlit {
    const CONTROLS: &'static [ControlSpec] = &[
        ControlSpec::new("wavelength", "Wavelength (nm)", (450.0, 700.0), 600.0, 1.0, "nm"),
        ControlSpec::new("width", "Slit Width (mm)", (0.05, 1.0), 0.2, 0.01, "mm"),
        ControlSpec::new(
            "distance",
            "Screen Distance (m)",
            (0.5, 3.0),
            1.0,
            0.01,
            "m",
        ),
    ];

    fn from_values(values: &[f64]) -> Result<Self, LabError> {
        let [wavelength_nm, slit_width_mm, screen_distance_m] = take_values("single-slit", values)?;
        Ok(Self {
            wavelength_nm,
            slit_width_mm,
            screen_distance_m,
        })
    }

    fn values(&self) -> Vec<f64> {
        vec![self.wavelength_nm, self.slit_width_mm, self.screen_distance_m]
    }

    fn evaluate(&self) -> EvaluationResult {
        tracing::debug!(
            wavelength_nm = self.wavelength_nm,
            slit_width_mm = self.slit_width_mm,
            screen_distance_m = self.screen_distance_m,
            epsilon = SINGULARITY_EPSILON,
            "evaluating single-slit diffraction"
        );

        let x = linspace(-SCREEN_HALF_WIDTH_M, SCREEN_HALF_WIDTH_M, SCREEN_SAMPLES);
        let intensity: Vec<f64> = x.iter().map(|&xi| self.intensity_at(xi)).collect();
        let position_mm: Vec<f64> = x.iter().map(|xi| xi * 1000.0).collect();

        EvaluationResult::Curve(Curve::from_samples(
            "Diffraction Pattern",
            "Position (mm)",
            "Normalized Intensity",
            &position_mm,
            &intensity,
        ))
    }
}
