/// Descriptive statistics summarizing one group of finite observations.
///
/// Statistics that are undefined for the input size are `None`: everything
/// except `n` when the sample is empty, and `sd` when fewer than two
/// observations are available (the sample standard deviation uses the n−1
/// denominator).
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveSummary {
    /// Number of observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation (n−1 denominator).
    pub sd: Option<f64>,
    /// Median (50th percentile, linear interpolation).
    pub median: Option<f64>,
    /// Interquartile range (75th − 25th percentile, linear interpolation).
    pub iqr: Option<f64>,
    /// Minimum value.
    pub min: Option<f64>,
    /// Maximum value.
    pub max: Option<f64>,
}

impl DescriptiveSummary {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// The values are sorted internally. Inputs are assumed finite; filtering
    /// missing and non-finite observations is the caller's responsibility.
    ///
    /// # Examples
    ///
    /// ```
    /// # use revstat_stats::descriptive::DescriptiveSummary;
    /// let summary = DescriptiveSummary::new(&[5.0, 2.0, 4.0, 1.0, 3.0]);
    /// assert_eq!(summary.n, 5);
    /// assert_eq!(summary.mean, Some(3.0));
    /// assert_eq!(summary.median, Some(3.0));
    /// assert_eq!(summary.iqr, Some(2.0));
    ///
    /// let empty = DescriptiveSummary::new(&[]);
    /// assert_eq!(empty.n, 0);
    /// assert_eq!(empty.mean, None);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let n = sorted_values.len();
        if n == 0 {
            return Self {
                n,
                mean: None,
                sd: None,
                median: None,
                iqr: None,
                min: None,
                max: None,
            };
        }

        let mean = sorted_values.iter().sum::<f64>() / n as f64;
        let sd = sample_sd(sorted_values, mean);
        let median = percentile(sorted_values, 50.0);
        let iqr = percentile(sorted_values, 75.0) - percentile(sorted_values, 25.0);

        Self {
            n,
            mean: Some(mean),
            sd,
            median: Some(median),
            iqr: Some(iqr),
            min: sorted_values.first().copied(),
            max: sorted_values.last().copied(),
        }
    }
}

/// Computes the sample standard deviation (n−1 denominator).
///
/// Returns `None` for fewer than two observations.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_sd(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some((ss / (n - 1) as f64).sqrt())
}

/// Computes a percentile from sorted data using linear interpolation.
///
/// For a dataset of n values, the percentile p maps to the fractional index
/// `(n − 1) · p / 100`; values between adjacent ranks are interpolated
/// linearly. This matches the interpolation used by common numeric packages.
///
/// # Panics
///
/// Panics if `sorted_values` is empty.
///
/// # Examples
///
/// ```
/// # use revstat_stats::descriptive::percentile;
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile(&values, 50.0), 3.0);
/// assert_eq!(percentile(&values, 25.0), 2.0);
/// assert_eq!(percentile(&values, 10.0), 1.4);
/// ```
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    assert!(!sorted_values.is_empty(), "percentile of empty sample");

    if sorted_values.len() == 1 {
        return sorted_values[0];
    }

    let index = (percentile / 100.0) * (sorted_values.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted_values[lower]
    } else {
        let weight = index - lower as f64;
        sorted_values[lower].mul_add(1.0 - weight, sorted_values[upper] * weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_known_values() {
        let summary = DescriptiveSummary::new(&[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(summary.n, 5);
        assert_eq!(summary.mean, Some(6.0));
        assert_eq!(summary.median, Some(6.0));
        assert_eq!(summary.min, Some(2.0));
        assert_eq!(summary.max, Some(10.0));
        assert_eq!(summary.iqr, Some(4.0));
        // Sample variance is 10.
        let sd = summary.sd.unwrap();
        assert!((sd - 10.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sample_is_undefined() {
        let summary = DescriptiveSummary::new(&[]);
        assert_eq!(summary.n, 0);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.sd, None);
        assert_eq!(summary.median, None);
        assert_eq!(summary.iqr, None);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
    }

    #[test]
    fn test_single_value_has_no_sd() {
        let summary = DescriptiveSummary::new(&[3.5]);
        assert_eq!(summary.n, 1);
        assert_eq!(summary.mean, Some(3.5));
        assert_eq!(summary.sd, None);
        assert_eq!(summary.median, Some(3.5));
        assert_eq!(summary.iqr, Some(0.0));
    }

    #[test]
    fn test_iqr_is_nonnegative() {
        let summary = DescriptiveSummary::new(&[9.0, 1.0, 4.0, 4.0, 7.0, 2.0]);
        assert!(summary.iqr.unwrap() >= 0.0);
        assert!(summary.sd.unwrap() >= 0.0);
    }

    #[test]
    fn test_percentile_interpolates_linearly() {
        let values = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile(&values, 0.0), 10.0);
        assert_eq!(percentile(&values, 100.0), 40.0);
        assert_eq!(percentile(&values, 50.0), 25.0);
        assert!((percentile(&values, 75.0) - 32.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[42.0], 2.5), 42.0);
        assert_eq!(percentile(&[42.0], 97.5), 42.0);
    }
}
