//! Error handling and exit codes.

use std::process::ExitCode;

use optolab_core::constants::exit_codes;
use optolab_core::LabError;

/// Exit code for a lab error.
#[must_use]
pub fn exit_code(err: &LabError) -> i32 {
    match err {
        LabError::UnknownExperiment(_)
        | LabError::OutOfRange { .. }
        | LabError::ParameterCount { .. } => exit_codes::ERROR_CONFIG,
        LabError::Render(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error; non-lab errors are generic.
#[must_use]
pub fn handle_error(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LabError>()
        .map_or(exit_codes::ERROR_GENERIC, exit_code)
}

/// Numeric exit status of an `app::run` outcome.
#[must_use]
pub fn exit_status(outcome: &anyhow::Result<()>) -> i32 {
    match outcome {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => handle_error(err),
    }
}

/// Turn the outcome of `app::run` into a process exit code.
///
/// Lab errors were already shown by the presenter; anything else is
/// printed here.
#[must_use]
pub fn report(outcome: anyhow::Result<()>) -> ExitCode {
    if let Err(err) = &outcome {
        if err.downcast_ref::<LabError>().is_none() {
            eprintln!("Error: {err:#}");
        }
    }
    let status = exit_status(&outcome);
    ExitCode::from(u8::try_from(status).unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&LabError::UnknownExperiment("prism".into())), 4);
        let out_of_range = LabError::OutOfRange {
            control: "angle",
            value: 200.0,
            min: 0.0,
            max: 180.0,
        };
        assert_eq!(exit_code(&out_of_range), 4);
        let count = LabError::ParameterCount {
            experiment: "laser",
            expected: 3,
            got: 1,
        };
        assert_eq!(exit_code(&count), 4);
        assert_eq!(exit_code(&LabError::Render("tty".into())), 1);
    }

    #[test]
    fn anyhow_errors() {
        let lab = anyhow::Error::from(LabError::UnknownExperiment("x".into()));
        assert_eq!(handle_error(&lab), exit_codes::ERROR_CONFIG);
        let other = anyhow::anyhow!("disk on fire");
        assert_eq!(handle_error(&other), exit_codes::ERROR_GENERIC);
    }

    #[test]
    fn outcome_status() {
        assert_eq!(exit_status(&Ok(())), exit_codes::SUCCESS);
        let lab = Err(LabError::UnknownExperiment("prism".into()).into());
        assert_eq!(exit_status(&lab), exit_codes::ERROR_CONFIG);
        let other = Err(anyhow::anyhow!("disk on fire"));
        assert_eq!(exit_status(&other), exit_codes::ERROR_GENERIC);
    }

    #[test]
    fn report_does_not_panic() {
        let _ = report(Ok(()));
        let _ = report(Err(LabError::Render("tty".into()).into()));
        let _ = report(Err(anyhow::anyhow!("disk on fire")));
    }
}
