//! # optolab-tui
//!
//! Interactive lab with sliders and plots, using ratatui with Elm architecture.

pub mod caption;
pub mod chart;
pub mod controls;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod styles;

pub use logs::LogScrollState;
pub use messages::LabMessage;
pub use model::{LabApp, LabLayout};
