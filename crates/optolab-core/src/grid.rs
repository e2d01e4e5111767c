//! Uniform sample grids.

/// Return `count` evenly spaced samples over `[start, stop]`, both ends included.
///
/// The last sample is pinned to `stop` so rounding in the step never
/// pushes the grid past its window.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = resolution(start, stop, count);
            let mut samples: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            samples[count - 1] = stop;
            samples
        }
    }
}

/// Spacing between adjacent samples of a `linspace(start, stop, count)` grid.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn resolution(start: f64, stop: f64, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    (stop - start) / (count - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_included() {
        let grid = linspace(-0.01, 0.01, 2000);
        assert_eq!(grid.len(), 2000);
        assert!((grid[0] + 0.01).abs() < f64::EPSILON);
        assert!((grid[1999] - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn strictly_increasing() {
        let grid = linspace(-0.6, 0.6, 400);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn even_grid_skips_zero() {
        let grid = linspace(-1.0, 1.0, 4);
        assert!(grid.iter().all(|&x| x != 0.0));
    }

    #[test]
    fn degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 5.0, 1), vec![3.0]);
    }

    #[test]
    fn resolution_matches_step() {
        let grid = linspace(0.0, 1.0, 11);
        let step = resolution(0.0, 1.0, 11);
        assert!((grid[1] - grid[0] - step).abs() < 1e-15);
        assert!((resolution(0.0, 1.0, 1)).abs() < f64::EPSILON);
    }
}
