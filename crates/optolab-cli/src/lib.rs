//! # optolab-cli
//!
//! CLI readouts, curve tables, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CLIResultPresenter;
