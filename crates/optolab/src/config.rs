//! Application configuration from CLI flags and environment.

use clap::{Args, Parser, Subcommand};

use optolab_core::{
    DoubleSlit, ElectroOpticModulator, ExperimentParams, LaserCavity, LedBandgap,
    Photodiode, Polarizer, SingleSlit,
};

/// OptoSim Lab: optics and optoelectronics calculator.
#[derive(Parser, Debug)]
#[command(name = "optolab", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Experiment to open by name or alias when no subcommand is given.
    #[arg(short, long)]
    pub experiment: Option<String>,

    /// Launch the interactive lab.
    #[arg(long, global = true)]
    pub tui: bool,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show derived values and the physical interpretation.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Quiet mode (only the value, or only the table rows).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Curve table rows to print; 0 prints every sample.
    #[arg(long, default_value_t = 11, env = "OPTOLAB_SAMPLES", global = true)]
    pub samples: usize,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Young's double slit interference pattern.
    DoubleSlit(DoubleSlitArgs),
    /// Single slit diffraction pattern.
    SingleSlit(SingleSlitArgs),
    /// Malus' law transmission through a polarizer.
    Polarization(PolarizationArgs),
    /// LED emission wavelength from the bandgap.
    Led(LedArgs),
    /// Laser threshold gain of a two-mirror cavity.
    Laser(LaserArgs),
    /// Photodiode I–V characteristic.
    Photodiode(PhotodiodeArgs),
    /// Pockels-effect modulator transmission.
    Modulator(ModulatorArgs),
    /// List experiments and their controls.
    List,
}

impl Command {
    /// Parameters from the subcommand flags. Ranges are checked later.
    #[must_use]
    pub fn params(&self) -> Option<ExperimentParams> {
        Some(match *self {
            Self::DoubleSlit(DoubleSlitArgs {
                wavelength,
                separation,
                distance,
            }) => ExperimentParams::DoubleSlit(DoubleSlit {
                wavelength_nm: wavelength,
                separation_mm: separation,
                screen_distance_m: distance,
            }),
            Self::SingleSlit(SingleSlitArgs {
                wavelength,
                width,
                distance,
            }) => ExperimentParams::SingleSlit(SingleSlit {
                wavelength_nm: wavelength,
                slit_width_mm: width,
                screen_distance_m: distance,
            }),
            Self::Polarization(PolarizationArgs { angle }) => {
                ExperimentParams::Polarization(Polarizer { angle_deg: angle })
            }
            Self::Led(LedArgs { bandgap }) => {
                ExperimentParams::Led(LedBandgap { bandgap_ev: bandgap })
            }
            Self::Laser(LaserArgs { r1, r2, length }) => ExperimentParams::Laser(LaserCavity {
                reflectivity_1: r1,
                reflectivity_2: r2,
                length_cm: length,
            }),
            Self::Photodiode(PhotodiodeArgs {
                saturation,
                illumination,
                temperature,
            }) => ExperimentParams::Photodiode(Photodiode {
                saturation_ua: saturation,
                illumination_ua: illumination,
                temperature_c: temperature,
            }),
            Self::Modulator(ModulatorArgs { voltage, vpi }) => {
                ExperimentParams::Modulator(ElectroOpticModulator {
                    voltage_v: voltage,
                    half_wave_voltage_v: vpi,
                })
            }
            Self::List => return None,
        })
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct DoubleSlitArgs {
    /// Wavelength in nm [400–700].
    #[arg(long, default_value_t = 550.0, allow_negative_numbers = true)]
    pub wavelength: f64,
    /// Slit separation in mm [0.1–2.0].
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub separation: f64,
    /// Screen distance in m [0.1–2.0].
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub distance: f64,
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct SingleSlitArgs {
    /// Wavelength in nm [450–700].
    #[arg(long, default_value_t = 600.0, allow_negative_numbers = true)]
    pub wavelength: f64,
    /// Slit width in mm [0.05–1.0].
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    pub width: f64,
    /// Screen distance in m [0.5–3.0].
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub distance: f64,
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct PolarizationArgs {
    /// Analyser angle in degrees [0–180].
    #[arg(long, default_value_t = 45.0, allow_negative_numbers = true)]
    pub angle: f64,
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct LedArgs {
    /// Bandgap energy in eV [1.2–3.5].
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub bandgap: f64,
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct LaserArgs {
    /// Mirror 1 reflectivity [0.3–0.99].
    #[arg(long, default_value_t = 0.9, allow_negative_numbers = true)]
    pub r1: f64,
    /// Mirror 2 reflectivity [0.3–0.99].
    #[arg(long, default_value_t = 0.8, allow_negative_numbers = true)]
    pub r2: f64,
    /// Cavity length in cm [0.1–5.0].
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub length: f64,
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct PhotodiodeArgs {
    /// Saturation current in µA [0.1–10].
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub saturation: f64,
    /// Illumination (photo) current in µA [0–50].
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub illumination: f64,
    /// Temperature in °C [0–80].
    #[arg(long, default_value_t = 27.0, allow_negative_numbers = true)]
    pub temperature: f64,
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct ModulatorArgs {
    /// Applied voltage in V [0–500].
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub voltage: f64,
    /// Half-wave voltage Vπ in V [50–400].
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    pub vpi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use optolab_core::Experiment;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("optolab").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn subcommand_defaults_match_controls() {
        let subcommands = [
            "double-slit",
            "single-slit",
            "polarization",
            "led",
            "laser",
            "photodiode",
            "modulator",
        ];
        for (name, experiment) in subcommands.into_iter().zip(Experiment::ALL) {
            assert_eq!(name, experiment.slug());
            let config = parse(&[name]);
            let params = config.command.as_ref().and_then(Command::params).unwrap();
            assert_eq!(params, experiment.default_params(), "{name}");
        }
    }

    #[test]
    fn flags_map_to_fields() {
        let config = parse(&["laser", "--r1", "0.5", "--length", "2.5"]);
        let Some(ExperimentParams::Laser(cavity)) = config.command.and_then(|c| c.params()) else {
            panic!("expected laser parameters");
        };
        assert!((cavity.reflectivity_1 - 0.5).abs() < f64::EPSILON);
        assert!((cavity.reflectivity_2 - 0.8).abs() < f64::EPSILON);
        assert!((cavity.length_cm - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_values_parse() {
        let config = parse(&["polarization", "--angle", "-5"]);
        let params = config.command.as_ref().and_then(Command::params);
        assert_eq!(
            params,
            Some(ExperimentParams::Polarization(Polarizer { angle_deg: -5.0 }))
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["photodiode", "-q", "-d", "--samples", "3"]);
        assert!(config.quiet);
        assert!(config.details);
        assert_eq!(config.samples, 3);
    }

    #[test]
    fn list_has_no_params() {
        let config = parse(&["list"]);
        assert_eq!(config.command, Some(Command::List));
        assert!(Command::List.params().is_none());
    }

    #[test]
    fn no_command() {
        let config = parse(&["--tui", "-e", "malus"]);
        assert!(config.command.is_none());
        assert!(config.tui);
        assert_eq!(config.experiment.as_deref(), Some("malus"));
    }
}
