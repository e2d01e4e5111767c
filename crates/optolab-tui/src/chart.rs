//! Output panel: line chart for curves, large readout for scalars.

use ratatui::layout::{Alignment, Rect};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use optolab_core::{Curve, EvaluationResult, Readout};

use crate::styles::ColorTheme;

/// Axis bounds with a small margin; degenerate spans are widened.
#[must_use]
pub fn padded_bounds(lo: f64, hi: f64) -> [f64; 2] {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        let pad = if lo.abs() < f64::EPSILON { 1.0 } else { lo.abs() * 0.1 };
        [lo - pad, hi + pad]
    } else {
        [lo - span * 0.05, hi + span * 0.05]
    }
}

/// Compact tick text: fixed point for ordinary magnitudes, exponent otherwise.
#[must_use]
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude > 0.0 && !(1e-2..1e4).contains(&magnitude) {
        format!("{value:.1e}")
    } else {
        format!("{value:.2}")
    }
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![format_tick(bounds[0]), format_tick(mid), format_tick(bounds[1])]
}

/// Render the result of the latest evaluation, or a placeholder.
pub fn render_output(
    frame: &mut Frame,
    area: Rect,
    result: Option<&EvaluationResult>,
    theme: &ColorTheme,
) {
    match result {
        Some(EvaluationResult::Curve(curve)) => render_curve(frame, area, curve, theme),
        Some(EvaluationResult::Scalar(readout)) => render_readout(frame, area, readout, theme),
        None => {
            let paragraph = Paragraph::new("Evaluating\u{2026}")
                .style(theme.muted_style())
                .block(Block::default().borders(Borders::ALL).title(" Output "));
            frame.render_widget(paragraph, area);
        }
    }
}

/// Braille line plot with titled axes.
pub fn render_curve(frame: &mut Frame, area: Rect, curve: &Curve, theme: &ColorTheme) {
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (curve.x_range(), curve.y_range()) else {
        return;
    };
    let x_bounds = [x_lo, x_hi];
    let y_bounds = padded_bounds(y_lo, y_hi);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.plot_style())
        .data(&curve.points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", curve.title))
                .title_style(theme.header_style()),
        )
        .x_axis(
            Axis::default()
                .title(curve.x_label)
                .style(theme.muted_style())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(curve.y_label)
                .style(theme.muted_style())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

/// Centered label and value.
pub fn render_readout(frame: &mut Frame, area: Rect, readout: &Readout, theme: &ColorTheme) {
    let blank_rows = area.height.saturating_sub(4) / 2;
    let mut lines: Vec<Line> = (0..blank_rows).map(|_| Line::default()).collect();
    lines.push(Line::from(Span::styled(readout.label, theme.muted_style())));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        readout.formatted_value(),
        theme.readout_style(),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Result "));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use optolab_core::{evaluate_defaults, Experiment};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_text(width: u16, height: u16, result: Option<&EvaluationResult>) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_output(frame, area, result, &ColorTheme::default());
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
    fn bounds_pad_and_widen() {
        let [lo, hi] = padded_bounds(0.0, 1.0);
        assert!((lo + 0.05).abs() < 1e-12);
        assert!((hi - 1.05).abs() < 1e-12);
        assert_eq!(padded_bounds(0.0, 0.0), [-1.0, 1.0]);
        let [lo, hi] = padded_bounds(5.0, 5.0);
        assert!(lo < 5.0 && hi > 5.0);
    }

    #[test]
    fn tick_formats() {
        assert_eq!(format_tick(0.0), "0.00");
        assert_eq!(format_tick(-10.0), "-10.00");
        assert_eq!(format_tick(0.5), "0.50");
        assert!(format_tick(2.5e9).contains('e'));
        assert!(format_tick(1e-5).contains('e'));
    }

    #[test]
    fn curve_draws_braille_and_labels() {
        let result = evaluate_defaults(Experiment::DoubleSlit);
        let text = render_text(100, 24, Some(&result));
        assert!(text.contains("Interference Pattern"));
        assert!(text.contains("Position (mm)"));
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28ff}').contains(&c)));
    }

    #[test]
    fn photodiode_curve_renders() {
        let result = evaluate_defaults(Experiment::Photodiode);
        let text = render_text(100, 24, Some(&result));
        assert!(text.contains("Voltage (V)"));
    }

    #[test]
    fn scalar_shows_readout() {
        let result = evaluate_defaults(Experiment::Laser);
        let text = render_text(60, 12, Some(&result));
        assert!(text.contains("Threshold Gain"));
        assert!(text.contains("16.43 1/m"));
    }

    #[test]
    fn placeholder_before_first_result() {
        let text = render_text(40, 5, None);
        assert!(text.contains("Evaluating"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let result = evaluate_defaults(Experiment::SingleSlit);
        render_text(8, 3, Some(&result));
        let result = evaluate_defaults(Experiment::Led);
        render_text(8, 3, Some(&result));
    }
}
