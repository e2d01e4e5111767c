//! TUI message types (Elm Messages).

use optolab_core::{EvaluationResult, Experiment};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum LabMessage {
    /// An evaluation finished. Dropped if `generation` is behind the model.
    Evaluated {
        generation: u64,
        experiment: Experiment,
        result: EvaluationResult,
    },
    /// Log message.
    Log(String),
    /// Error message.
    Error(String),
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Quit the application.
    Quit,
}
