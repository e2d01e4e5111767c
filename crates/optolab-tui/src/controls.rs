//! Slider panel: one gauge per control.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use optolab_core::ControlSpec;

use crate::styles::ColorTheme;

/// Fraction of the slider travel that `value` sits at.
#[must_use]
pub fn slider_ratio(spec: &ControlSpec, value: f64) -> f64 {
    let span = spec.max - spec.min;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - spec.min) / span).clamp(0.0, 1.0)
}

/// Value and unit as shown on the slider.
#[must_use]
pub fn slider_label(spec: &ControlSpec, value: f64) -> String {
    let number = format!("{:.*}", spec.decimals(), value);
    if spec.unit.is_empty() {
        number
    } else {
        format!("{number} {}", spec.unit)
    }
}

/// Render one gauge per control, highlighting `selected`.
#[allow(clippy::cast_possible_truncation)]
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    controls: &[ControlSpec],
    values: &[f64],
    selected: usize,
    theme: &ColorTheme,
) {
    if controls.is_empty() {
        return;
    }

    let per_gauge = 3u16;
    for (i, (spec, &value)) in controls.iter().zip(values).enumerate() {
        let y = area.y + (i as u16) * per_gauge;
        if y >= area.y + area.height {
            break;
        }
        let gauge_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: per_gauge.min(area.y + area.height - y),
        };

        let is_selected = i == selected;
        let marker = if is_selected { "\u{25b6} " } else { "" };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {marker}{} ", spec.label))
                    .border_style(theme.border_style(is_selected)),
            )
            .gauge_style(theme.gauge_style(is_selected))
            .label(slider_label(spec, value))
            .ratio(slider_ratio(spec, value));

        frame.render_widget(gauge, gauge_area);
    }
}
