//! CLI output formatting.

use optolab_core::{ControlSpec, Curve, Experiment};

/// Decimal places used for curve tables.
const TABLE_PRECISION: usize = 4;

/// Format a control value at its slider granularity, with unit.
#[must_use]
pub fn format_control(spec: &ControlSpec, value: f64) -> String {
    let number = format!("{:.*}", spec.decimals(), value);
    if spec.unit.is_empty() {
        format!("{}: {number}", spec.label)
    } else {
        format!("{}: {number} {}", spec.label, spec.unit)
    }
}

/// Format a control's range and default for listings.
#[must_use]
pub fn format_control_range(spec: &ControlSpec) -> String {
    let d = spec.decimals();
    format!(
        "--{:<13} {} [{:.*} – {:.*}, default {:.*}]",
        spec.key, spec.label, d, spec.min, d, spec.max, d, spec.default
    )
}

/// Summary lines for a curve: sample count, x span, y span, peak.
#[must_use]
pub fn format_curve_summary(curve: &Curve) -> Vec<String> {
    let mut lines = vec![format!("Samples: {}", curve.len())];
    if let Some((lo, hi)) = curve.x_range() {
        lines.push(format!("{}: {lo:.3} to {hi:.3}", curve.x_label));
    }
    if let Some((lo, hi)) = curve.y_range() {
        lines.push(format!("{}: min {lo:.4}, max {hi:.4}", curve.y_label));
    }
    if let Some((x, y)) = curve.peak() {
        lines.push(format!("Peak: {y:.4} at {x:.3}"));
    }
    lines
}

/// Column header for a curve table.
#[must_use]
pub fn format_table_header(curve: &Curve) -> String {
    format!("{:>16}  {:>22}", curve.x_label, curve.y_label)
}

/// One row per sample, `samples` rows spread evenly (0 = every sample).
#[must_use]
pub fn format_curve_rows(curve: &Curve, samples: usize) -> Vec<String> {
    curve
        .decimate(samples)
        .into_iter()
        .map(|(x, y)| format!("{x:>16.prec$}  {y:>22.prec$}", prec = TABLE_PRECISION))
        .collect()
}

/// Every experiment with its subcommand and controls.
#[must_use]
pub fn format_experiment_list() -> Vec<String> {
    let mut lines = Vec::new();
    for (i, experiment) in Experiment::ALL.iter().enumerate() {
        lines.push(format!(
            "{}. {:<13} {}",
            i + 1,
            experiment.slug(),
            experiment.name()
        ));
        for spec in experiment.controls() {
            lines.push(format!("     {}", format_control_range(spec)));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use optolab_core::{DoubleSlit, Evaluator, Polarizer};

    fn double_slit_curve() -> Curve {
        DoubleSlit::defaults().evaluate().as_curve().unwrap().clone()
    }

    #[test]
    fn control_integer_and_float() {
        let wavelength = &DoubleSlit::CONTROLS[0];
        assert_eq!(format_control(wavelength, 550.0), "Wavelength (nm): 550 nm");
        let separation = &DoubleSlit::CONTROLS[1];
        assert_eq!(
            format_control(separation, 0.5),
            "Slit Separation (mm): 0.50 mm"
        );
    }

    #[test]
    fn control_range_listing() {
        let angle = &Polarizer::CONTROLS[0];
        let line = format_control_range(angle);
        assert!(line.starts_with("--angle"));
        assert!(line.contains("[0 – 180, default 45]"));
    }

    #[test]
    fn summary_lines() {
        let lines = format_curve_summary(&double_slit_curve());
        assert_eq!(lines[0], "Samples: 2000");
        assert_eq!(lines[1], "Position (mm): -10.000 to 10.000");
        assert!(lines[2].starts_with("Normalized Intensity: min 0.0"));
        assert!(lines[3].starts_with("Peak: "));
    }

    #[test]
    fn rows_follow_sample_count() {
        let curve = double_slit_curve();
        assert_eq!(format_curve_rows(&curve, 11).len(), 11);
        assert_eq!(format_curve_rows(&curve, 0).len(), 2000);
        let first = &format_curve_rows(&curve, 11)[0];
        assert!(first.trim_start().starts_with("-10.0000"));
    }

    #[test]
    fn experiment_list_covers_all_controls() {
        let lines = format_experiment_list();
        let controls: usize = Experiment::ALL.iter().map(|e| e.controls().len()).sum();
        assert_eq!(lines.len(), Experiment::ALL.len() + controls);
        assert!(lines[0].starts_with("1. double-slit"));
        assert!(lines.iter().any(|l| l.contains("--vpi")));
        assert!(lines.iter().any(|l| l.starts_with("7. modulator")));
    }

    #[test]
    fn table_header_names_axes() {
        let header = format_table_header(&double_slit_curve());
        assert!(header.contains("Position (mm)"));
        assert!(header.contains("Normalized Intensity"));
    }
}
