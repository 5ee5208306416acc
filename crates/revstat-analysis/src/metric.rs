//! The fixed vocabulary of continuous reviewer metrics.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The continuous metrics computed per reviewer by the upstream feature
/// extraction stage.
///
/// Every output table uses the same metric ids (the `Display`
/// representation), so a reader can cross-reference rows across tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Total words written across all comments.
    #[display("total_words")]
    TotalWords,
    /// Mean words per comment.
    #[display("mean_words_per_comment")]
    MeanWordsPerComment,
    /// Number of rubric criteria the feedback addressed.
    #[display("rubric_criteria_addressed")]
    RubricCriteriaAddressed,
    /// Fraction of rubric criteria addressed.
    #[display("rubric_coverage_ratio")]
    RubricCoverageRatio,
    /// Comparative references per comment.
    #[display("comparative_reference_rate")]
    ComparativeReferenceRate,
    /// Mean of the scores the reviewer assigned.
    #[display("score_mean")]
    ScoreMean,
    /// Standard deviation of the scores the reviewer assigned.
    #[display("score_sd")]
    ScoreSd,
    /// Range of the scores the reviewer assigned.
    #[display("score_range")]
    ScoreRange,
}

/// All metrics, in the fixed order used by the per-metric output tables.
pub const ALL_METRICS: [Metric; 8] = [
    Metric::TotalWords,
    Metric::MeanWordsPerComment,
    Metric::RubricCriteriaAddressed,
    Metric::RubricCoverageRatio,
    Metric::ComparativeReferenceRate,
    Metric::ScoreMean,
    Metric::ScoreSd,
    Metric::ScoreRange,
];

impl Metric {
    /// Stable string id shared by all output tables.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Metric::TotalWords => "total_words",
            Metric::MeanWordsPerComment => "mean_words_per_comment",
            Metric::RubricCriteriaAddressed => "rubric_criteria_addressed",
            Metric::RubricCoverageRatio => "rubric_coverage_ratio",
            Metric::ComparativeReferenceRate => "comparative_reference_rate",
            Metric::ScoreMean => "score_mean",
            Metric::ScoreSd => "score_sd",
            Metric::ScoreRange => "score_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_id() {
        for metric in ALL_METRICS {
            assert_eq!(metric.to_string(), metric.id());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = ALL_METRICS.iter().map(|m| m.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ALL_METRICS.len());
    }
}
