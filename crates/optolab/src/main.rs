//! OptoSim Lab: optics and optoelectronics calculator.

use std::process::ExitCode;

use optolab_lib::{app, config, errors};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // The interactive lab owns the terminal, so it gets no log output.
    if !config.tui {
        let level = if config.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        };
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
            .with_writer(std::io::stderr)
            .init();
    }

    errors::report(app::run(&config))
}
