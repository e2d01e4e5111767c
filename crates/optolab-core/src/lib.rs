//! # optolab-core
//!
//! Physics core of OptoSim Lab: seven closed-form optics and
//! optoelectronics evaluators and the dispatcher that selects one of them.
//!
//! Every evaluator is a pure function of its parameter record; the
//! presentation layer consumes the resulting [`EvaluationResult`].

pub mod constants;
pub mod diffraction;
pub mod evaluator;
pub mod grid;
pub mod interference;
pub mod laser;
pub mod led;
pub mod modulator;
pub mod photodiode;
pub mod polarization;
pub mod presenter;
pub mod registry;
pub mod result;

// Re-exports
pub use constants::{exit_codes, SINGULARITY_EPSILON};
pub use diffraction::SingleSlit;
pub use evaluator::{ControlSpec, Evaluator, LabError};
pub use interference::DoubleSlit;
pub use laser::LaserCavity;
pub use led::LedBandgap;
pub use modulator::ElectroOpticModulator;
pub use photodiode::Photodiode;
pub use polarization::Polarizer;
pub use presenter::ResultPresenter;
pub use registry::{DefaultRegistry, Experiment, ExperimentParams, ExperimentRegistry};
pub use result::{Curve, EvaluationResult, Readout};

/// Evaluate an experiment at its default control values.
///
/// # Example
/// ```
/// use optolab_core::{evaluate_defaults, Experiment};
///
/// let result = evaluate_defaults(Experiment::Modulator);
/// assert_eq!(result.as_scalar().unwrap().formatted_value(), "0.500");
/// ```
#[must_use]
pub fn evaluate_defaults(experiment: Experiment) -> EvaluationResult {
    experiment.default_params().evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_evaluate_for_every_experiment() {
        for experiment in Experiment::ALL {
            let result = evaluate_defaults(experiment);
            assert_eq!(result.as_curve().is_some(), experiment.plots_curve(), "{experiment}");
        }
    }
}
