//! Scrollable log panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Scroll state for the log panel.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    /// First visible line index.
    pub offset: usize,
    /// Follow new messages.
    pub auto_scroll: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Handle a new log message (auto-scroll if enabled).
    pub fn on_new_message(&mut self, total_logs: usize) {
        if self.auto_scroll {
            self.offset = total_logs.saturating_sub(1);
        }
    }

    /// The log buffer dropped its oldest line.
    pub fn on_trim(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total_logs: usize) {
        self.offset = (self.offset + 1).min(total_logs.saturating_sub(1));
        if self.offset >= total_logs.saturating_sub(1) {
            self.auto_scroll = true;
        }
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// First line to draw so that `offset` stays visible, filling the panel.
fn first_visible(total: usize, visible: usize, offset: usize) -> usize {
    let bottom = offset.min(total.saturating_sub(1));
    (bottom + 1).saturating_sub(visible)
}

/// Render the scrollable log panel.
pub fn render_logs(
    frame: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll: &LogScrollState,
    theme: &ColorTheme,
) {
    let visible_height = area.height.saturating_sub(2) as usize; // borders
    let total = logs.len();
    let start = first_visible(total, visible_height, scroll.offset);

    let items: Vec<ListItem> = logs
        .iter()
        .skip(start)
        .take(visible_height)
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                theme.error_style()
            } else if log.starts_with("[WARN]") {
                theme.warning_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let title = if total > visible_height && !scroll.auto_scroll {
        format!(" Log ({}/{total}) ", scroll.offset + 1)
    } else {
        " Log ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.muted_style()),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn scroll_state_initial() {
        let state = LogScrollState::new();
        assert_eq!(state.offset, 0);
        assert!(state.auto_scroll);
    }

    #[test]
    fn scroll_state_follows_new_messages() {
        let mut state = LogScrollState::new();
        state.on_new_message(10);
        assert_eq!(state.offset, 9);
        state.scroll_up();
        state.on_new_message(11);
        assert_eq!(state.offset, 8);
    }

    #[test]
    fn scroll_up_at_zero() {
        let mut state = LogScrollState::new();
        state.scroll_up();
        assert_eq!(state.offset, 0);
        assert!(!state.auto_scroll);
    }

    #[test]
    fn scroll_down_to_bottom_enables_auto_scroll() {
        let mut state = LogScrollState::new();
        state.auto_scroll = false;
        state.offset = 8;
        state.scroll_down(10);
        assert_eq!(state.offset, 9);
        assert!(state.auto_scroll);
    }

    #[test]
    fn trim_shifts_offset() {
        let mut state = LogScrollState::new();
        state.offset = 4;
        state.on_trim();
        assert_eq!(state.offset, 3);
    }

    #[test]
    fn visible_window() {
        assert_eq!(first_visible(0, 5, 0), 0);
        assert_eq!(first_visible(3, 5, 2), 0);
        assert_eq!(first_visible(20, 5, 19), 15);
        assert_eq!(first_visible(20, 5, 2), 0);
        assert_eq!(first_visible(20, 5, 10), 6);
    }

    #[test]
    fn render_shows_latest_lines() {
        let logs: Vec<String> = (0..30).map(|i| format!("line {i}")).collect();
        let mut scroll = LogScrollState::new();
        scroll.on_new_message(logs.len());
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_logs(frame, area, &logs, &scroll, &ColorTheme::default());
            })
            .unwrap();
        let row: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 4)].symbol().to_string())
            .collect();
        assert!(row.contains("line 29"));
    }

    #[test]
    fn render_empty_does_not_panic() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_logs(frame, area, &[], &LogScrollState::new(), &ColorTheme::default());
            })
            .unwrap();
    }
}
