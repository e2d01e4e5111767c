//! Application entry point and dispatch.

use anyhow::Result;
use tracing::info;

use optolab_cli::output::format_experiment_list;
use optolab_cli::ui::{header, print_error};
use optolab_cli::CLIResultPresenter;
use optolab_core::presenter::run_and_present;
use optolab_core::{
    DefaultRegistry, Experiment, ExperimentParams, ExperimentRegistry, LabError,
};
use optolab_tui::LabApp;

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        optolab_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let params = selected_params(config).inspect_err(|e| print_error(&e.to_string()))?;

    if config.tui {
        let params = params.unwrap_or_else(|| Experiment::DoubleSlit.default_params());
        return run_tui(params);
    }

    match params {
        Some(params) => run_cli(config, &params),
        None => {
            list_experiments(config);
            Ok(())
        }
    }
}

/// Parameters chosen on the command line: a subcommand's flags, or the
/// defaults of an experiment named with `--experiment`.
pub fn selected_params(config: &AppConfig) -> Result<Option<ExperimentParams>, LabError> {
    if let Some(command) = &config.command {
        return Ok(command.params());
    }
    let registry = DefaultRegistry::new();
    config
        .experiment
        .as_deref()
        .map(|name| registry.get(name))
        .transpose()
}

fn run_cli(config: &AppConfig, params: &ExperimentParams) -> Result<()> {
    info!(experiment = params.experiment().slug(), "cli mode");
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.samples);
    run_and_present(params, &presenter, config.details)?;
    Ok(())
}

fn run_tui(params: ExperimentParams) -> Result<()> {
    params
        .validate()
        .inspect_err(|e| print_error(&e.to_string()))?;
    info!(experiment = params.experiment().slug(), "tui mode");

    let mut app = LabApp::new(params);
    app.run()
        .map_err(|e| LabError::Render(e.to_string()))
        .inspect_err(|e| print_error(&e.to_string()))?;
    Ok(())
}

fn list_experiments(config: &AppConfig) {
    info!("listing experiments");
    if config.quiet {
        for slug in DefaultRegistry::new().available() {
            println!("{slug}");
        }
        return;
    }
    println!("{}", header(&full_version()));
    for line in format_experiment_list() {
        println!("{line}");
    }
    if config.command.is_none() {
        println!();
        println!("Run `optolab <EXPERIMENT> --help` for flags,");
        println!("or `optolab --tui` for the interactive lab.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("optolab").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn subcommand_wins_over_name() {
        let params = selected_params(&config(&["-e", "led", "laser"])).unwrap();
        assert_eq!(params.map(|p| p.experiment()), Some(Experiment::Laser));
    }

    #[test]
    fn experiment_by_name_or_alias() {
        let params = selected_params(&config(&["-e", "pockels"])).unwrap();
        assert_eq!(params, Some(Experiment::Modulator.default_params()));
        let params = selected_params(&config(&["--experiment", "Laser Threshold Gain"])).unwrap();
        assert_eq!(params.map(|p| p.experiment()), Some(Experiment::Laser));
    }

    #[test]
    fn unknown_experiment_is_an_error() {
        let err = selected_params(&config(&["-e", "prism"])).unwrap_err();
        assert_eq!(err, LabError::UnknownExperiment("prism".into()));
    }

    #[test]
    fn nothing_selected() {
        assert_eq!(selected_params(&config(&[])).unwrap(), None);
        assert_eq!(selected_params(&config(&["list"])).unwrap(), None);
    }

    #[test]
    fn cli_run_reports_out_of_range() {
        let err = run(&config(&["-q", "led", "--bandgap", "9"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LabError>(),
            Some(LabError::OutOfRange { control: "bandgap", .. })
        ));
    }

    #[test]
    fn cli_run_succeeds_in_range() {
        assert!(run(&config(&["-q", "modulator", "--voltage", "200"])).is_ok());
        assert!(run(&config(&["-q", "list"])).is_ok());
    }
}
