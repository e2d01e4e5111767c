//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub plot: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            plot: Color::LightGreen,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border of a panel, highlighted when it holds the selection.
    #[must_use]
    pub fn border_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Filled part of a slider gauge.
    #[must_use]
    pub fn gauge_style(&self, selected: bool) -> Style {
        if selected {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.primary)
        }
    }

    /// Plotted line.
    #[must_use]
    pub fn plot_style(&self) -> Style {
        Style::default().fg(self.plot)
    }

    /// Large scalar readout.
    #[must_use]
    pub fn readout_style(&self) -> Style {
        Style::default()
            .fg(self.plot)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Get the style for warning text.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_changes_border() {
        let theme = ColorTheme::default();
        assert_ne!(theme.border_style(true), theme.border_style(false));
        assert_ne!(theme.gauge_style(true), theme.gauge_style(false));
    }

    #[test]
    fn header_is_bold() {
        let theme = ColorTheme::default();
        assert!(theme.header_style().add_modifier.contains(Modifier::BOLD));
    }
}
