//! # Correlation Estimation
//!
//! Pearson correlation over pairwise-complete series, with the approximate
//! standard error `sqrt((1 - r²) / (n - 2))`. Series carry `Option<f64>`
//! values so lag and difference transforms can vacate slots the same way
//! the aligned table does for missing prices.

/// Result of a correlation estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationEstimate {
    /// Pearson correlation coefficient; NaN when undefined.
    pub r: f64,
    /// Approximate standard error; `None` when fewer than three complete
    /// pairs survive or when `r` itself is undefined.
    pub se: Option<f64>,
    /// Number of complete pairs used.
    pub n: usize,
}

/// Pearson correlation of two equal-length slices.
///
/// Returns NaN for empty input or when either series has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return f64::NAN;
    }

    let mean_x: f64 = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y: f64 = y[..n].iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (&xi, &yi) in x[..n].iter().zip(y[..n].iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    (covariance / denominator).clamp(-1.0, 1.0)
}

/// Correlate two series after dropping every pair with a missing value.
///
/// The standard error uses `sqrt((1 - r²) / (n - 2))` and is reported as
/// `None` when `n < 3`, where the formula is undefined. With no complete
/// pairs at all the coefficient is NaN and the call still returns normally.
pub fn correlation_with_se(x: &[Option<f64>], y: &[Option<f64>]) -> CorrelationEstimate {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter_map(|(&a, &b)| match (a, b) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .unzip();

    let n = xs.len();
    let r = pearson(&xs, &ys);
    let se = if n < 3 || !r.is_finite() {
        None
    } else {
        Some(((1.0 - r * r) / (n as f64 - 2.0)).sqrt())
    };

    CorrelationEstimate { r, se, n }
}

/// Shift a series by `offset` slots, vacating the exposed positions.
///
/// Positive `offset` lags the series (slot `i` takes the value from
/// `i - offset`); negative `offset` leads it.
pub fn shift(series: &[Option<f64>], offset: isize) -> Vec<Option<f64>> {
    (0..series.len())
        .map(|i| {
            let source = i as isize - offset;
            if source >= 0 && (source as usize) < series.len() {
                series[source as usize]
            } else {
                None
            }
        })
        .collect()
}

/// First differences of a series; the first slot (and any slot missing an
/// operand) is vacated.
pub fn first_difference(series: &[Option<f64>]) -> Vec<Option<f64>> {
    (0..series.len())
        .map(|i| {
            if i == 0 {
                return None;
            }
            match (series[i - 1], series[i]) {
                (Some(previous), Some(current)) => Some(current - previous),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_all(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_identical_sequences_correlate_exactly() {
        let series = some_all(&[1.0, 2.0, 3.0, 4.0]);
        let estimate = correlation_with_se(&series, &series);
        assert_eq!(estimate.r, 1.0);
        assert_eq!(estimate.se, Some(0.0));
        assert_eq!(estimate.n, 4);
    }

    #[test]
    fn test_two_pairs_have_undefined_se() {
        let sentiment = some_all(&[-1.0, 1.0]);
        let price = some_all(&[20.0, 40.0]);
        let estimate = correlation_with_se(&sentiment, &price);
        assert_eq!(estimate.r, 1.0);
        assert_eq!(estimate.se, None);
        assert_eq!(estimate.n, 2);
    }

    #[test]
    fn test_perfect_anticorrelation() {
        let x = some_all(&[1.0, 2.0, 3.0]);
        let y = some_all(&[3.0, 2.0, 1.0]);
        let estimate = correlation_with_se(&x, &y);
        assert_eq!(estimate.r, -1.0);
        assert_eq!(estimate.se, Some(0.0));
    }

    #[test]
    fn test_empty_input_does_not_panic() {
        let estimate = correlation_with_se(&[], &[]);
        assert!(estimate.r.is_nan());
        assert_eq!(estimate.se, None);
        assert_eq!(estimate.n, 0);
    }

    #[test]
    fn test_missing_pairs_are_dropped() {
        let x = vec![Some(1.0), None, Some(3.0), Some(4.0)];
        let y = vec![Some(1.0), Some(2.0), None, Some(4.0)];
        let estimate = correlation_with_se(&x, &y);
        assert_eq!(estimate.n, 2);
        assert_eq!(estimate.se, None);
    }

    #[test]
    fn test_zero_variance_is_nan() {
        let x = some_all(&[2.0, 2.0, 2.0]);
        let y = some_all(&[1.0, 2.0, 3.0]);
        let estimate = correlation_with_se(&x, &y);
        assert!(estimate.r.is_nan());
        assert_eq!(estimate.se, None);
    }

    #[test]
    fn test_shift_lags_and_leads() {
        let series = some_all(&[1.0, 2.0, 3.0]);
        assert_eq!(shift(&series, 1), vec![None, Some(1.0), Some(2.0)]);
        assert_eq!(shift(&series, -1), vec![Some(2.0), Some(3.0), None]);
        assert_eq!(shift(&series, 0), series);
    }

    #[test]
    fn test_first_difference() {
        let series = vec![Some(1.0), Some(3.0), None, Some(10.0)];
        assert_eq!(
            first_difference(&series),
            vec![None, Some(2.0), None, None]
        );
    }
}
