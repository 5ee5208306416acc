//! Descriptive statistics per (condition, metric) group.

use revstat_stats::descriptive::DescriptiveSummary;

use crate::{
    dataset::{CONDITIONS, Condition, ReviewerDataset},
    metric::{ALL_METRICS, Metric},
};

/// One row of the descriptives table.
///
/// `n` counts finite observations only; the remaining statistics are `None`
/// whenever they are undefined for that count (everything at n = 0, the
/// sample SD at n < 2).
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveRow {
    /// Condition group this row summarizes.
    pub condition: Condition,
    /// Metric this row summarizes.
    pub metric: Metric,
    /// Count of finite observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub sd: Option<f64>,
    /// Median.
    pub median: Option<f64>,
    /// Interquartile range.
    pub iqr: Option<f64>,
    /// Minimum.
    pub min: Option<f64>,
    /// Maximum.
    pub max: Option<f64>,
}

/// Computes the descriptives table: one row per (condition, metric) group.
///
/// Rows are sorted by (metric id, condition) for deterministic output.
#[must_use]
pub fn descriptives_by_condition(dataset: &ReviewerDataset) -> Vec<DescriptiveRow> {
    let mut rows = Vec::with_capacity(ALL_METRICS.len() * CONDITIONS.len());
    for metric in ALL_METRICS {
        for condition in CONDITIONS {
            let values = dataset.metric_values(condition, metric);
            let summary = DescriptiveSummary::new(&values);
            rows.push(DescriptiveRow {
                condition,
                metric,
                n: summary.n,
                mean: summary.mean,
                sd: summary.sd,
                median: summary.median,
                iqr: summary.iqr,
                min: summary.min,
                max: summary.max,
            });
        }
    }
    rows.sort_by(|a, b| {
        a.metric
            .id()
            .cmp(b.metric.id())
            .then(a.condition.cmp(&b.condition))
    });
    rows
}

#[cfg(test)]
mod tests {
    use crate::dataset::test_support::blank_record;

    use super::*;

    fn dataset() -> ReviewerDataset {
        let mut records = vec![];
        for (i, words) in [100.0, 200.0, 300.0].iter().enumerate() {
            let mut r = blank_record(&format!("b{i}"), Condition::Baseline);
            r.total_words = Some(*words);
            records.push(r);
        }
        for (i, words) in [400.0, 500.0].iter().enumerate() {
            let mut r = blank_record(&format!("n{i}"), Condition::Nudge);
            r.total_words = Some(*words);
            records.push(r);
        }
        ReviewerDataset::validate(records).unwrap()
    }

    fn find(rows: &[DescriptiveRow], condition: Condition, metric: Metric) -> &DescriptiveRow {
        rows.iter()
            .find(|r| r.condition == condition && r.metric == metric)
            .unwrap()
    }

    #[test]
    fn test_row_per_condition_and_metric() {
        let rows = descriptives_by_condition(&dataset());
        assert_eq!(rows.len(), ALL_METRICS.len() * 2);
    }

    #[test]
    fn test_known_group_statistics() {
        let rows = descriptives_by_condition(&dataset());
        let row = find(&rows, Condition::Baseline, Metric::TotalWords);
        assert_eq!(row.n, 3);
        assert_eq!(row.mean, Some(200.0));
        assert_eq!(row.median, Some(200.0));
        assert_eq!(row.min, Some(100.0));
        assert_eq!(row.max, Some(300.0));
        assert_eq!(row.iqr, Some(100.0));

        let row = find(&rows, Condition::Nudge, Metric::TotalWords);
        assert_eq!(row.n, 2);
        assert_eq!(row.mean, Some(450.0));
    }

    #[test]
    fn test_all_missing_metric_yields_undefined_row() {
        let rows = descriptives_by_condition(&dataset());
        let row = find(&rows, Condition::Baseline, Metric::ScoreMean);
        assert_eq!(row.n, 0);
        assert_eq!(row.mean, None);
        assert_eq!(row.sd, None);
        assert_eq!(row.median, None);
        assert_eq!(row.iqr, None);
    }

    #[test]
    fn test_rows_sorted_by_metric_then_condition() {
        let rows = descriptives_by_condition(&dataset());
        let keys: Vec<_> = rows.iter().map(|r| (r.metric.id(), r.condition)).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_n_never_exceeds_group_size() {
        let dataset = dataset();
        let rows = descriptives_by_condition(&dataset);
        for row in rows {
            let group_size = dataset.records_in(row.condition).count();
            assert!(row.n <= group_size);
        }
    }
}
