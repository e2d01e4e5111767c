//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use optolab_core::Experiment;

use crate::styles::ColorTheme;

/// Render the header: lab title, experiment position, and heading.
pub fn render_header(frame: &mut Frame, area: Rect, experiment: Experiment, theme: &ColorTheme) {
    let text = vec![Line::from(vec![
        Span::styled("OptoSim Lab", theme.header_style()),
        Span::styled(
            format!(" [{}/{}] ", experiment.index() + 1, Experiment::ALL.len()),
            theme.muted_style(),
        ),
        Span::styled(experiment.heading(), theme.text_style()),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(format!(" {} ", experiment.name()))
        .border_style(theme.muted_style());

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(experiment: Experiment) -> String {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, experiment, &ColorTheme::default());
            })
            .unwrap();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf.buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn header_names_lab_and_experiment() {
        let row = screen(Experiment::Laser);
        assert!(row.contains("OptoSim Lab"));
        assert!(row.contains("[5/7]"));
        assert!(row.contains("Laser Threshold Gain Estimator"));
    }

    #[test]
    fn header_small_area() {
        let backend = TestBackend::new(10, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, Experiment::DoubleSlit, &ColorTheme::default());
            })
            .unwrap();
    }
}
