//! Presentation interfaces.

use crate::evaluator::LabError;
use crate::registry::ExperimentParams;
use crate::result::EvaluationResult;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the result of evaluating `params`.
    fn present_result(&self, params: &ExperimentParams, result: &EvaluationResult, details: bool);

    /// Present an error.
    fn present_error(&self, error: &LabError);
}

/// Evaluate `params` and hand the outcome to `presenter`.
pub fn run_and_present(
    params: &ExperimentParams,
    presenter: &dyn ResultPresenter,
    details: bool,
) -> Result<EvaluationResult, LabError> {
    match params.evaluate_checked() {
        Ok(result) => {
            presenter.present_result(params, &result, details);
            Ok(result)
        }
        Err(e) => {
            presenter.present_error(&e);
            Err(e)
        }
    }
}
