//! Evaluation results handed to the presentation layer.

use std::fmt;

/// A single formatted value: label, value, unit, and display precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    /// What the value measures.
    pub label: &'static str,
    /// The computed value.
    pub value: f64,
    /// Unit suffix, empty for dimensionless values.
    pub unit: &'static str,
    /// Number of decimals shown.
    pub precision: usize,
}

impl Readout {
    #[must_use]
    pub fn new(label: &'static str, value: f64, unit: &'static str, precision: usize) -> Self {
        Self {
            label,
            value,
            unit,
            precision,
        }
    }

    /// The value at display precision, with its unit when there is one.
    #[must_use]
    pub fn formatted_value(&self) -> String {
        if self.unit.is_empty() {
            format!("{:.*}", self.precision, self.value)
        } else {
            format!("{:.*} {}", self.precision, self.value, self.unit)
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted_value())
    }
}

/// An ordered run of `(x, y)` samples with plot labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Plot title.
    pub title: &'static str,
    /// Independent axis label.
    pub x_label: &'static str,
    /// Dependent axis label.
    pub y_label: &'static str,
    /// Samples, ordered by strictly increasing x.
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    /// Pair two index-aligned sample vectors.
    #[must_use]
    pub fn from_samples(
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
        xs: &[f64],
        ys: &[f64],
    ) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self {
            title,
            x_label,
            y_label,
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last x value.
    #[must_use]
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.0, last.0))
    }

    /// Smallest and largest y value.
    #[must_use]
    pub fn y_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let (lo, hi) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        Some((lo, hi))
    }

    /// Sample with the largest y, first one wins on ties.
    #[must_use]
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.1 > best.1 { p } else { best })
    }

    /// Up to `count` samples spread evenly along the curve, ends included.
    ///
    /// A `count` of zero, or one at least as large as the curve, returns every sample.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn decimate(&self, count: usize) -> Vec<(f64, f64)> {
        let n = self.points.len();
        if count == 0 || count >= n {
            return self.points.clone();
        }
        if count == 1 {
            return vec![self.points[0]];
        }
        let step = (n - 1) as f64 / (count - 1) as f64;
        (0..count)
            .map(|i| self.points[(i as f64 * step).round() as usize])
            .collect()
    }
}

/// What an evaluator produces.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationResult {
    /// A single numeric readout.
    Scalar(Readout),
    /// A plotted curve.
    Curve(Curve),
}

impl EvaluationResult {
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Readout> {
        match self {
            Self::Scalar(readout) => Some(readout),
            Self::Curve(_) => None,
        }
    }

    #[must_use]
    pub fn as_curve(&self) -> Option<&Curve> {
        match self {
            Self::Curve(curve) => Some(curve),
            Self::Scalar(_) => None,
        }
    }

    /// Whether every number in the result is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(readout) => readout.value.is_finite(),
            Self::Curve(curve) => curve
                .points
                .iter()
                .all(|(x, y)| x.is_finite() && y.is_finite()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Curve {
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
        Curve::from_samples("Ramp", "x", "y", &xs, &ys)
    }

    #[test]
    fn readout_display_with_unit() {
        let r = Readout::new("Emission Wavelength", 620.31, "nm", 1);
        assert_eq!(r.to_string(), "Emission Wavelength: 620.3 nm");
    }

    #[test]
    fn readout_display_without_unit() {
        let r = Readout::new("Output Intensity (Normalized)", 0.5, "", 3);
        assert_eq!(r.to_string(), "Output Intensity (Normalized): 0.500");
    }

    #[test]
    fn curve_ranges() {
        let c = ramp(5);
        assert_eq!(c.len(), 5);
        assert_eq!(c.x_range(), Some((0.0, 4.0)));
        assert_eq!(c.y_range(), Some((0.0, 16.0)));
        assert_eq!(c.peak(), Some((4.0, 16.0)));
    }

    #[test]
    fn empty_curve_has_no_ranges() {
        let c = Curve::from_samples("Empty", "x", "y", &[], &[]);
        assert!(c.is_empty());
        assert!(c.x_range().is_none());
        assert!(c.y_range().is_none());
        assert!(c.peak().is_none());
    }

    #[test]
    fn decimate_keeps_ends() {
        let c = ramp(2000);
        let picked = c.decimate(11);
        assert_eq!(picked.len(), 11);
        assert_eq!(picked[0].0, 0.0);
        assert_eq!(picked[10].0, 1999.0);
    }

    #[test]
    fn decimate_zero_returns_all() {
        let c = ramp(7);
        assert_eq!(c.decimate(0).len(), 7);
        assert_eq!(c.decimate(100).len(), 7);
        assert_eq!(c.decimate(1), vec![(0.0, 0.0)]);
    }

    #[test]
    fn result_accessors() {
        let scalar = EvaluationResult::Scalar(Readout::new("I", 1.0, "", 2));
        assert!(scalar.as_scalar().is_some());
        assert!(scalar.as_curve().is_none());
        assert!(scalar.is_finite());

        let curve = EvaluationResult::Curve(ramp(3));
        assert!(curve.as_curve().is_some());
        assert!(curve.is_finite());

        let bad = EvaluationResult::Scalar(Readout::new("I", f64::NAN, "", 2));
        assert!(!bad.is_finite());
    }
}
