//! Caption panel: physical interpretation and derived values.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use optolab_core::Readout;

use crate::styles::ColorTheme;

pub fn render_caption(
    frame: &mut Frame,
    area: Rect,
    caption: &str,
    details: &[Readout],
    theme: &ColorTheme,
) {
    let mut lines = vec![Line::from(Span::styled(caption, theme.text_style()))];
    if !details.is_empty() {
        let spans: Vec<Span> = details
            .iter()
            .enumerate()
            .flat_map(|(i, readout)| {
                let sep = if i == 0 { "" } else { "   " };
                [
                    Span::styled(format!("{sep}{}: ", readout.label), theme.muted_style()),
                    Span::styled(readout.formatted_value(), theme.header_style()),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About ")
                .border_style(theme.muted_style()),
        );
    frame.render_widget(paragraph, area);
}
