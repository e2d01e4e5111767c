//! Physical constants, sampling grids, and exit codes.
//!
//! The constants carry the rounded textbook values the lab has always
//! shown to students. They are not CODATA values and must not be swapped
//! for them: every readout and plot is defined in terms of these numbers.

/// Planck constant in eV·s.
pub const PLANCK_EV_S: f64 = 4.135e-15;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Elementary charge, C.
pub const ELEMENTARY_CHARGE: f64 = 1.6e-19;

/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.38e-23;

/// Offset from degrees Celsius to kelvin.
pub const CELSIUS_TO_KELVIN: f64 = 273.0;

/// Added to the single-slit phase denominator so the screen centre never divides by zero.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Number of screen positions sampled by the interference and diffraction patterns.
pub const SCREEN_SAMPLES: usize = 2000;

/// Half-width of the observation window on the screen, in metres.
pub const SCREEN_HALF_WIDTH_M: f64 = 0.01;

/// Number of bias points sampled along the photodiode I–V curve.
pub const BIAS_SAMPLES: usize = 400;

/// Bias sweep limit in volts; the sweep covers `[-BIAS_LIMIT_V, BIAS_LIMIT_V]`.
pub const BIAS_LIMIT_V: f64 = 0.6;

/// Incident intensity in front of the analyser.
pub const INCIDENT_INTENSITY: f64 = 1.0;

/// Unit conversions.
pub mod units {
    /// Nanometres to metres.
    pub const NM: f64 = 1e-9;
    /// Millimetres to metres.
    pub const MM: f64 = 1e-3;
    /// Centimetres to metres.
    pub const CM: f64 = 1e-2;
    /// Microamps to amps.
    pub const UA: f64 = 1e-6;
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (unknown experiment, out-of-range control).
    pub const ERROR_CONFIG: i32 = 4;
}
