//! Effect sizes and bootstrap confidence intervals per metric.
//!
//! Both tables compare the nudge group against the baseline group metric by
//! metric; no cross-metric pooling happens anywhere. Degenerate metrics
//! (fewer than two finite values in either group) produce rows with undefined
//! cells rather than being dropped, so partial degeneracy stays visible in
//! the output.

use rand::Rng;
use revstat_stats::{
    bootstrap::{self, BootstrapInterval},
    effect_size,
};

use crate::{
    dataset::{Condition, ReviewerDataset},
    metric::{ALL_METRICS, Metric},
};

/// One row of the effect-size table.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSizeRow {
    /// Metric being compared.
    pub metric: Metric,
    /// Hedges' g, nudge − baseline.
    pub hedges_g: Option<f64>,
    /// Raw mean difference, nudge − baseline.
    pub mean_diff: Option<f64>,
}

/// One row of the bootstrap-CI table.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapRow {
    /// Metric being compared.
    pub metric: Metric,
    /// Actual mean difference, nudge − baseline.
    pub mean_diff: Option<f64>,
    /// Lower 95% percentile-bootstrap bound.
    pub ci_lo: Option<f64>,
    /// Upper 95% percentile-bootstrap bound.
    pub ci_hi: Option<f64>,
}

/// Computes Hedges' g and the raw mean difference for every metric.
#[must_use]
pub fn effect_sizes(dataset: &ReviewerDataset) -> Vec<EffectSizeRow> {
    ALL_METRICS
        .iter()
        .map(|&metric| {
            let baseline = dataset.metric_values(Condition::Baseline, metric);
            let nudge = dataset.metric_values(Condition::Nudge, metric);
            EffectSizeRow {
                metric,
                hedges_g: effect_size::hedges_g(&baseline, &nudge),
                mean_diff: effect_size::mean_difference(&baseline, &nudge),
            }
        })
        .collect()
}

/// Computes a percentile-bootstrap interval of the mean difference for every
/// metric.
///
/// All metrics draw from the same caller-owned generator, in the fixed
/// [`ALL_METRICS`] order, so a fixed seed reproduces every interval
/// bit-identically.
pub fn bootstrap_intervals<R>(
    dataset: &ReviewerDataset,
    resamples: usize,
    rng: &mut R,
) -> Vec<BootstrapRow>
where
    R: Rng + ?Sized,
{
    ALL_METRICS
        .iter()
        .map(|&metric| {
            let baseline = dataset.metric_values(Condition::Baseline, metric);
            let nudge = dataset.metric_values(Condition::Nudge, metric);
            let BootstrapInterval { diff, lo, hi } =
                bootstrap::bootstrap_mean_diff(&baseline, &nudge, resamples, rng);
            BootstrapRow {
                metric,
                mean_diff: diff,
                ci_lo: lo,
                ci_hi: hi,
            }
        })
        .collect()
}
