//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextExperiment,
    PreviousExperiment,
    /// Jump to the experiment at this menu index.
    SelectExperiment(usize),
    SelectUp,
    SelectDown,
    Decrease,
    Increase,
    PageDecrease,
    PageIncrease,
    Minimum,
    Maximum,
    Reset,
    ToggleCaption,
    ToggleLogs,
    LogScrollUp,
    LogScrollDown,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Tab => KeyAction::NextExperiment,
        KeyCode::BackTab => KeyAction::PreviousExperiment,
        KeyCode::Char(c @ '1'..='7') => KeyAction::SelectExperiment((c as usize) - ('1' as usize)),
        KeyCode::Up => KeyAction::SelectUp,
        KeyCode::Down => KeyAction::SelectDown,
        KeyCode::Left => KeyAction::Decrease,
        KeyCode::Right => KeyAction::Increase,
        KeyCode::PageDown => KeyAction::PageDecrease,
        KeyCode::PageUp => KeyAction::PageIncrease,
        KeyCode::Home => KeyAction::Minimum,
        KeyCode::End => KeyAction::Maximum,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::Char('i') => KeyAction::ToggleCaption,
        KeyCode::Char('g') => KeyAction::ToggleLogs,
        KeyCode::Char('[') => KeyAction::LogScrollUp,
        KeyCode::Char(']') => KeyAction::LogScrollDown,
        _ => KeyAction::None,
    }
}
