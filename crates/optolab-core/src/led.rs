//! LED emission wavelength from the semiconductor bandgap.

use crate::constants::{units, ELEMENTARY_CHARGE, PLANCK_EV_S, SPEED_OF_LIGHT};
use crate::evaluator::{take_values, ControlSpec, Evaluator, LabError};
use crate::result::{EvaluationResult, Readout};

/// Bandgap energy of the emitting junction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedBandgap {
    pub bandgap_ev: f64,
}

impl LedBandgap {
    /// Peak emission wavelength `λ = hc / E`, in nanometres.
    ///
    /// `h` is given in eV·s, so it is lifted to J·s with `q` before
    /// dividing by the bandgap in joules (`Eg·q`). Dividing the eV·s
    /// constant directly by `Eg·q` gives about 3.9e21 nm, not a wavelength.
    #[must_use]
    pub fn wavelength_nm(&self) -> f64 {
        let planck_j_s = PLANCK_EV_S * ELEMENTARY_CHARGE;
        let energy_j = self.bandgap_ev * ELEMENTARY_CHARGE;
        let wavelength_m = (planck_j_s * SPEED_OF_LIGHT) / energy_j;
        wavelength_m / units::NM
    }
}

impl Evaluator for LedBandgap {
    const CONTROLS: &'static [ControlSpec] = &[ControlSpec::new(
        "bandgap",
        "Bandgap Energy (eV)",
        (1.2, 3.5),
        2.0,
        0.01,
        "eV",
    )];

    fn from_values(values: &[f64]) -> Result<Self, LabError> {
        let [bandgap_ev] = take_values("led", values)?;
        Ok(Self { bandgap_ev })
    }

    fn values(&self) -> Vec<f64> {
        vec![self.bandgap_ev]
    }

    fn evaluate(&self) -> EvaluationResult {
        tracing::debug!(bandgap_ev = self.bandgap_ev, "evaluating LED emission wavelength");
        EvaluationResult::Scalar(Readout::new(
            "Emission Wavelength",
            self.wavelength_nm(),
            "nm",
            1,
        ))
    }
}
