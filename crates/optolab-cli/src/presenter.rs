//! CLI result presenter.

use optolab_core::{EvaluationResult, ExperimentParams, LabError, ResultPresenter};
use tracing::debug;

use crate::output::{
    format_control, format_curve_rows, format_curve_summary, format_table_header,
};
use crate::ui::{header, muted, print_error, result_line};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    samples: usize,
}

impl CLIResultPresenter {
    /// `samples` is the number of curve rows to print; 0 prints every sample.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, samples: usize) -> Self {
        Self {
            verbose,
            quiet,
            samples,
        }
    }

    /// Lines that `present_result` prints.
    #[must_use]
    pub fn render_lines(
        &self,
        params: &ExperimentParams,
        result: &EvaluationResult,
        details: bool,
    ) -> Vec<String> {
        if self.quiet {
            return match result {
                EvaluationResult::Scalar(readout) => {
                    vec![format!("{:.*}", readout.precision, readout.value)]
                }
                EvaluationResult::Curve(curve) => format_curve_rows(curve, self.samples),
            };
        }

        let experiment = params.experiment();
        let mut lines = vec![header(experiment.heading())];
        for (spec, value) in experiment.controls().iter().zip(params.values()) {
            lines.push(format!("  {}", format_control(spec, value)));
        }
        lines.push(String::new());

        match result {
            EvaluationResult::Scalar(readout) => {
                lines.push(result_line(readout.label, &readout.formatted_value()));
                if self.verbose {
                    lines.push(format!("  (unrounded: {})", readout.value));
                }
            }
            EvaluationResult::Curve(curve) => {
                lines.push(result_line("Plot", curve.title));
                lines.extend(format_curve_summary(curve));
                lines.push(String::new());
                lines.push(format_table_header(curve));
                lines.extend(format_curve_rows(curve, self.samples));
            }
        }

        if details {
            let derived = params.details();
            if !derived.is_empty() {
                lines.push(String::new());
                lines.extend(derived.iter().map(ToString::to_string));
            }
            lines.push(String::new());
            lines.push(muted(experiment.caption()));
        }

        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, params: &ExperimentParams, result: &EvaluationResult, details: bool) {
        debug!(
            experiment = params.experiment().slug(),
            quiet = self.quiet,
            details,
            "presenting result"
        );
        for line in self.render_lines(params, result, details) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &LabError) {
        print_error(&error.to_string());
    }
}
