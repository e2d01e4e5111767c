//! Experiment registry and dispatcher.
//!
//! `Experiment` is the closed set of lab experiments and carries their
//! presentation metadata. `ExperimentParams` pairs an experiment with its
//! typed parameter record and routes evaluation to exactly one evaluator.

use std::fmt;
use std::str::FromStr;

use crate::diffraction::SingleSlit;
use crate::evaluator::{ControlSpec, Evaluator, LabError};
use crate::interference::DoubleSlit;
use crate::laser::LaserCavity;
use crate::led::LedBandgap;
use crate::modulator::ElectroOpticModulator;
use crate::photodiode::Photodiode;
use crate::polarization::Polarizer;
use crate::result::{EvaluationResult, Readout};

/// The seven lab experiments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experiment {
    DoubleSlit,
    SingleSlit,
    Polarization,
    Led,
    Laser,
    Photodiode,
    Modulator,
}

impl Experiment {
    /// Every experiment, in menu order.
    pub const ALL: [Self; 7] = [
        Self::DoubleSlit,
        Self::SingleSlit,
        Self::Polarization,
        Self::Led,
        Self::Laser,
        Self::Photodiode,
        Self::Modulator,
    ];

    /// Menu name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DoubleSlit => "Young's Double Slit — Interference",
            Self::SingleSlit => "Single Slit — Diffraction",
            Self::Polarization => "Polarization (Malus Law)",
            Self::Led => "LED: Bandgap → Wavelength",
            Self::Laser => "Laser Threshold Gain",
            Self::Photodiode => "Photodiode I–V Characteristics",
            Self::Modulator => "Electro-Optic Modulator",
        }
    }

    /// Command-line identifier.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::DoubleSlit => "double-slit",
            Self::SingleSlit => "single-slit",
            Self::Polarization => "polarization",
            Self::Led => "led",
            Self::Laser => "laser",
            Self::Photodiode => "photodiode",
            Self::Modulator => "modulator",
        }
    }

    /// Alternative identifiers accepted by [`FromStr`].
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::DoubleSlit => &["interference", "young"],
            Self::SingleSlit => &["diffraction"],
            Self::Polarization => &["malus", "polarizer"],
            Self::Led => &["bandgap"],
            Self::Laser => &["threshold-gain"],
            Self::Photodiode => &["iv"],
            Self::Modulator => &["eom", "pockels"],
        }
    }

    /// Panel heading.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::DoubleSlit => "Young's Double Slit — Interference Pattern",
            Self::SingleSlit => "Single Slit Diffraction",
            Self::Polarization => "Polarization — Malus' Law",
            Self::Led => "LED Bandgap to Emission Wavelength",
            Self::Laser => "Laser Threshold Gain Estimator",
            Self::Photodiode => "Photodiode I–V Characteristics",
            Self::Modulator => "Electro-Optic Modulator (Pockels Effect)",
        }
    }

    /// One-line physical interpretation shown under the result.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::DoubleSlit => {
                "Bright & dark fringes appear due to constructive and destructive interference."
            }
            Self::SingleSlit => "Central maximum is widest — diffraction causes wave spreading.",
            Self::Polarization => "I = I0 cos²θ — transmission decreases as angle increases.",
            Self::Led => {
                "Smaller bandgap → longer wavelength (red). Larger bandgap → blue/violet."
            }
            Self::Laser => "Laser oscillation starts when gain exceeds optical losses.",
            Self::Photodiode => {
                "Reverse bias + illumination shifts current downward (photocurrent)."
            }
            Self::Modulator => {
                "Voltage controls phase → controls light intensity (digital/analog modulation)."
            }
        }
    }

    /// Slider controls, in the order their values are passed around.
    #[must_use]
    pub fn controls(self) -> &'static [ControlSpec] {
        match self {
            Self::DoubleSlit => DoubleSlit::CONTROLS,
            Self::SingleSlit => SingleSlit::CONTROLS,
            Self::Polarization => Polarizer::CONTROLS,
            Self::Led => LedBandgap::CONTROLS,
            Self::Laser => LaserCavity::CONTROLS,
            Self::Photodiode => Photodiode::CONTROLS,
            Self::Modulator => ElectroOpticModulator::CONTROLS,
        }
    }

    /// Parameters with every control at its default.
    #[must_use]
    pub fn default_params(self) -> ExperimentParams {
        match self {
            Self::DoubleSlit => ExperimentParams::DoubleSlit(DoubleSlit::defaults()),
            Self::SingleSlit => ExperimentParams::SingleSlit(SingleSlit::defaults()),
            Self::Polarization => ExperimentParams::Polarization(Polarizer::defaults()),
            Self::Led => ExperimentParams::Led(LedBandgap::defaults()),
            Self::Laser => ExperimentParams::Laser(LaserCavity::defaults()),
            Self::Photodiode => ExperimentParams::Photodiode(Photodiode::defaults()),
            Self::Modulator => ExperimentParams::Modulator(ElectroOpticModulator::defaults()),
        }
    }

    /// Whether the experiment plots a curve rather than a single readout.
    #[must_use]
    pub fn plots_curve(self) -> bool {
        matches!(self, Self::DoubleSlit | Self::SingleSlit | Self::Photodiode)
    }

    /// Position in [`Experiment::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&e| e == self).unwrap_or(0)
    }

    /// The experiment after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The experiment before this one, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Experiment {
    type Err = LabError;

    /// Accepts the slug, an alias, or the exact menu name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let lowered = key.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| {
                e.name() == key || e.slug() == lowered || e.aliases().iter().any(|a| *a == lowered)
            })
            .ok_or_else(|| LabError::UnknownExperiment(key.to_string()))
    }
}

/// An experiment together with its parameter record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExperimentParams {
    DoubleSlit(DoubleSlit),
    SingleSlit(SingleSlit),
    Polarization(Polarizer),
    Led(LedBandgap),
    Laser(LaserCavity),
    Photodiode(Photodiode),
    Modulator(ElectroOpticModulator),
}

impl ExperimentParams {
    /// Build parameters for `experiment` from control values in `controls()` order.
    pub fn from_values(experiment: Experiment, values: &[f64]) -> Result<Self, LabError> {
        Ok(match experiment {
            Experiment::DoubleSlit => Self::DoubleSlit(DoubleSlit::from_values(values)?),
            Experiment::SingleSlit => Self::SingleSlit(SingleSlit::from_values(values)?),
            Experiment::Polarization => Self::Polarization(Polarizer::from_values(values)?),
            Experiment::Led => Self::Led(LedBandgap::from_values(values)?),
            Experiment::Laser => Self::Laser(LaserCavity::from_values(values)?),
            Experiment::Photodiode => Self::Photodiode(Photodiode::from_values(values)?),
            Experiment::Modulator => Self::Modulator(ElectroOpticModulator::from_values(values)?),
        })
    }

    /// Which experiment these parameters belong to.
    #[must_use]
    pub fn experiment(&self) -> Experiment {
        match self {
            Self::DoubleSlit(_) => Experiment::DoubleSlit,
            Self::SingleSlit(_) => Experiment::SingleSlit,
            Self::Polarization(_) => Experiment::Polarization,
            Self::Led(_) => Experiment::Led,
            Self::Laser(_) => Experiment::Laser,
            Self::Photodiode(_) => Experiment::Photodiode,
            Self::Modulator(_) => Experiment::Modulator,
        }
    }

    /// Control values in `controls()` order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::DoubleSlit(p) => p.values(),
            Self::SingleSlit(p) => p.values(),
            Self::Polarization(p) => p.values(),
            Self::Led(p) => p.values(),
            Self::Laser(p) => p.values(),
            Self::Photodiode(p) => p.values(),
            Self::Modulator(p) => p.values(),
        }
    }

    /// Check every control value against its slider bounds.
    pub fn validate(&self) -> Result<(), LabError> {
        match self {
            Self::DoubleSlit(p) => p.validate(),
            Self::SingleSlit(p) => p.validate(),
            Self::Polarization(p) => p.validate(),
            Self::Led(p) => p.validate(),
            Self::Laser(p) => p.validate(),
            Self::Photodiode(p) => p.validate(),
            Self::Modulator(p) => p.validate(),
        }
    }

    /// Run the one evaluator these parameters select.
    #[must_use]
    pub fn evaluate(&self) -> EvaluationResult {
        tracing::trace!(experiment = self.experiment().slug(), "dispatching");
        match self {
            Self::DoubleSlit(p) => p.evaluate(),
            Self::SingleSlit(p) => p.evaluate(),
            Self::Polarization(p) => p.evaluate(),
            Self::Led(p) => p.evaluate(),
            Self::Laser(p) => p.evaluate(),
            Self::Photodiode(p) => p.evaluate(),
            Self::Modulator(p) => p.evaluate(),
        }
    }

    /// Validate, then evaluate.
    pub fn evaluate_checked(&self) -> Result<EvaluationResult, LabError> {
        self.validate()?;
        Ok(self.evaluate())
    }

    /// Derived quantities worth reading off a plotted curve.
    #[must_use]
    pub fn details(&self) -> Vec<Readout> {
        match self {
            Self::DoubleSlit(p) => vec![Readout::new(
                "Fringe Spacing",
                p.fringe_spacing_mm(),
                "mm",
                3,
            )],
            Self::SingleSlit(p) => vec![Readout::new(
                "Central Maximum Width",
                p.central_maximum_width_mm(),
                "mm",
                3,
            )],
            Self::Photodiode(p) => vec![
                Readout::new("Thermal Voltage", p.thermal_voltage() * 1000.0, "mV", 2),
                Readout::new("Open-Circuit Voltage", p.open_circuit_voltage(), "V", 3),
            ],
            Self::Polarization(_) | Self::Led(_) | Self::Laser(_) | Self::Modulator(_) => {
                Vec::new()
            }
        }
    }
}

/// Lookup of experiments by name.
pub trait ExperimentRegistry: Send + Sync {
    /// Default parameters of the experiment called `name`.
    fn get(&self, name: &str) -> Result<ExperimentParams, LabError>;

    /// Slugs of every experiment, in menu order.
    fn available(&self) -> Vec<&str>;
}

/// Registry over the closed set in [`Experiment::ALL`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRegistry;

impl DefaultRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExperimentRegistry for DefaultRegistry {
    fn get(&self, name: &str) -> Result<ExperimentParams, LabError> {
        let experiment: Experiment = name.parse()?;
        tracing::trace!(experiment = experiment.slug(), name, "registry lookup");
        Ok(experiment.default_params())
    }

    fn available(&self) -> Vec<&str> {
        Experiment::ALL.iter().map(|e| e.slug()).collect()
    }
}
