//! OptoSim Lab library: application logic for the optics calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
