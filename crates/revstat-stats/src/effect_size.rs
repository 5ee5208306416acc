//! Standardized mean differences between two groups.
//!
//! Effect sizes are always oriented treatment − baseline: a positive value
//! means the treatment group scored higher on the metric.

/// Computes the raw mean difference, treatment − baseline.
///
/// Returns `None` when either group is empty.
///
/// # Examples
///
/// ```
/// # use revstat_stats::effect_size::mean_difference;
/// let diff = mean_difference(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
/// assert_eq!(diff, Some(3.0));
/// assert_eq!(mean_difference(&[], &[1.0]), None);
/// ```
#[must_use]
pub fn mean_difference(baseline: &[f64], treatment: &[f64]) -> Option<f64> {
    Some(mean(treatment)? - mean(baseline)?)
}

/// Computes Hedges' g, the bias-corrected standardized mean difference.
///
/// Cohen's d is computed with the pooled standard deviation
/// `sp = sqrt(((n1−1)s1² + (n2−1)s2²) / (n1+n2−2))` and then shrunk by the
/// small-sample correction `J = 1 − 3 / (4(n1+n2) − 9)`.
///
/// Returns `None` when either group has fewer than two observations or when
/// the pooled standard deviation is zero or non-finite.
///
/// # Examples
///
/// ```
/// # use revstat_stats::effect_size::hedges_g;
/// let baseline = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let treatment = [12.0, 14.0, 16.0, 18.0, 20.0];
/// let g = hedges_g(&baseline, &treatment).unwrap();
/// assert!((g - 2.8563).abs() < 1e-3);
///
/// // Zero pooled variance is undefined, not an error.
/// assert_eq!(hedges_g(&[1.0, 1.0], &[2.0, 2.0]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn hedges_g(baseline: &[f64], treatment: &[f64]) -> Option<f64> {
    let (n1, n2) = (baseline.len(), treatment.len());
    if n1 < 2 || n2 < 2 {
        return None;
    }

    let var1 = sample_variance(baseline);
    let var2 = sample_variance(treatment);
    let pooled_sd = (((n1 - 1) as f64).mul_add(var1, (n2 - 1) as f64 * var2)
        / (n1 + n2 - 2) as f64)
        .sqrt();
    if !pooled_sd.is_finite() || pooled_sd == 0.0 {
        return None;
    }

    let d = (mean(treatment)? - mean(baseline)?) / pooled_sd;
    let correction = 1.0 - 3.0 / (4.0 * (n1 + n2) as f64 - 9.0);
    Some(correction * d)
}

#[expect(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[expect(clippy::cast_precision_loss)]
fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len();
    debug_assert!(n >= 2);
    let mean = values.iter().sum::<f64>() / n as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64
}
