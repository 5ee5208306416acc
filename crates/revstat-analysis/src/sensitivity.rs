//! Rank-based sensitivity checks per metric.
//!
//! These are robustness companions to the parametric effect sizes, reported
//! alongside them and never in their place. A test that cannot be computed
//! (empty group, fully tied samples) logs a warning and reports undefined
//! cells; it never aborts the run.

use revstat_stats::rank_test;
use tracing::warn;

use crate::{
    dataset::{Condition, ReviewerDataset},
    metric::{ALL_METRICS, Metric},
};

/// One row of the sensitivity table.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityRow {
    /// Metric being compared.
    pub metric: Metric,
    /// Mann–Whitney U statistic for the nudge group.
    pub statistic: Option<f64>,
    /// Two-sided p-value.
    pub p_value: Option<f64>,
}

/// Runs the Mann–Whitney sensitivity check for every metric.
#[must_use]
pub fn rank_sensitivity(dataset: &ReviewerDataset) -> Vec<SensitivityRow> {
    ALL_METRICS
        .iter()
        .map(|&metric| {
            let baseline = dataset.metric_values(Condition::Baseline, metric);
            let nudge = dataset.metric_values(Condition::Nudge, metric);
            match rank_test::mann_whitney_u(&baseline, &nudge) {
                Some(test) => SensitivityRow {
                    metric,
                    statistic: Some(test.statistic),
                    p_value: Some(test.p_value),
                },
                None => {
                    warn!(
                        metric = metric.id(),
                        n_baseline = baseline.len(),
                        n_nudge = nudge.len(),
                        "rank sensitivity test undefined for metric"
                    );
                    SensitivityRow {
                        metric,
                        statistic: None,
                        p_value: None,
                    }
                }
            }
        })
        .collect()
}
