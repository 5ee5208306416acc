//! Reviewer records and the validated dataset boundary.
//!
//! # Schema
//!
//! The engine consumes the cleaned reviewer-level feature table produced by
//! the upstream cleaning stage, as a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "reviewer_id": "r-0412",
//!     "condition": "nudge",
//!     "semester": "2025F",
//!     "comparative_references": 3,
//!     "total_words": 412.0,
//!     "mean_words_per_comment": 58.9,
//!     "rubric_criteria_addressed": 5.0,
//!     "rubric_coverage_ratio": 0.83,
//!     "comparative_reference_rate": 0.43,
//!     "score_mean": 7.8,
//!     "score_sd": 1.2,
//!     "score_range": 3.0
//!   }
//! ]
//! ```
//!
//! Metric fields are nullable: `null` marks a missing measurement, which is
//! distinct from zero. A missing *field* is a schema error and fails at
//! deserialization time, so every structural problem surfaces before any
//! statistics are computed.
//!
//! # Validation
//!
//! [`ReviewerDataset::validate`] is the only way to obtain a dataset value;
//! it rejects input with fewer than two distinct condition levels. Everything
//! downstream takes `&ReviewerDataset` and can rely on both groups existing.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// The two-level experimental grouping factor.
///
/// The ordering is load-bearing: baseline is always the reference level and
/// every reported difference is nudge − baseline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Control cohort reviewing with the unmodified interface.
    #[display("baseline")]
    Baseline,
    /// Treatment cohort reviewing with the visual-nudge interface.
    #[display("nudge")]
    Nudge,
}

/// Both condition levels, baseline first.
pub const CONDITIONS: [Condition; 2] = [Condition::Baseline, Condition::Nudge];

/// One reviewer-level observation from the cleaned feature table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Record {
    /// Opaque reviewer identifier (not used by the engine).
    pub reviewer_id: String,
    /// Experimental condition this reviewer belongs to.
    pub condition: Condition,
    /// Cohort label, informational only.
    pub semester: String,
    /// Count of comparative references across the reviewer's comments.
    #[serde(deserialize_with = "required_nullable")]
    pub comparative_references: Option<f64>,
    /// Total words written across all comments.
    #[serde(deserialize_with = "required_nullable")]
    pub total_words: Option<f64>,
    /// Mean words per comment.
    #[serde(deserialize_with = "required_nullable")]
    pub mean_words_per_comment: Option<f64>,
    /// Number of rubric criteria addressed.
    #[serde(deserialize_with = "required_nullable")]
    pub rubric_criteria_addressed: Option<f64>,
    /// Fraction of rubric criteria addressed.
    #[serde(deserialize_with = "required_nullable")]
    pub rubric_coverage_ratio: Option<f64>,
    /// Comparative references per comment.
    #[serde(deserialize_with = "required_nullable")]
    pub comparative_reference_rate: Option<f64>,
    /// Mean assigned score.
    #[serde(deserialize_with = "required_nullable")]
    pub score_mean: Option<f64>,
    /// Standard deviation of assigned scores.
    #[serde(deserialize_with = "required_nullable")]
    pub score_sd: Option<f64>,
    /// Range of assigned scores.
    #[serde(deserialize_with = "required_nullable")]
    pub score_range: Option<f64>,
}

/// Marks a nullable metric column as required: serde treats a plain `Option`
/// field as implicitly optional, but for this schema an absent column is a
/// configuration error while an explicit `null` is a missing measurement.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(deserializer)
}

impl Record {
    /// Returns the value of `metric`, or `None` when it is missing or
    /// non-finite.
    ///
    /// Non-finite values are treated exactly like missing ones: the record is
    /// excluded from that metric's computations and nothing else.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        let value = match metric {
            Metric::TotalWords => self.total_words,
            Metric::MeanWordsPerComment => self.mean_words_per_comment,
            Metric::RubricCriteriaAddressed => self.rubric_criteria_addressed,
            Metric::RubricCoverageRatio => self.rubric_coverage_ratio,
            Metric::ComparativeReferenceRate => self.comparative_reference_rate,
            Metric::ScoreMean => self.score_mean,
            Metric::ScoreSd => self.score_sd,
            Metric::ScoreRange => self.score_range,
        };
        value.filter(|v| v.is_finite())
    }

    /// Whether the reviewer made any comparative reference.
    ///
    /// A missing count yields `false` rather than a missing indicator,
    /// mirroring the upstream definition of the flag.
    #[must_use]
    pub fn any_comparative(&self) -> bool {
        self.comparative_references.is_some_and(|count| count > 0.0)
    }
}

/// Configuration errors detected at the dataset boundary.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DatasetError {
    /// The input contained no records at all.
    #[display("dataset contains no records")]
    Empty,
    /// A condition level has no records, so no two-group comparison exists.
    #[display("condition '{condition}' has no records; need both levels for comparison")]
    MissingCondition {
        /// The absent condition level.
        condition: Condition,
    },
}

/// A validated, read-only reviewer dataset.
///
/// Guaranteed to contain at least one record for each condition level.
#[derive(Debug, Clone)]
pub struct ReviewerDataset {
    records: Vec<Record>,
}

impl ReviewerDataset {
    /// Validates the cleaned records and constructs the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] when the input is empty or either condition
    /// level is absent. These are fatal configuration errors: the analysis
    /// must not produce partial output for such input.
    pub fn validate(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        for condition in CONDITIONS {
            if !records.iter().any(|r| r.condition == condition) {
                return Err(DatasetError::MissingCondition { condition });
            }
        }
        Ok(Self { records })
    }

    /// All records, in input order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records belonging to one condition group.
    pub fn records_in(&self, condition: Condition) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.condition == condition)
    }

    /// Finite values of one metric within one condition group.
    ///
    /// The length of the returned vector is the group's per-metric sample
    /// size, which may differ across metrics within the same dataset.
    #[must_use]
    pub fn metric_values(&self, condition: Condition, metric: Metric) -> Vec<f64> {
        self.records_in(condition)
            .filter_map(|r| r.metric(metric))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{Condition, Record};

    /// A record with every nullable field empty.
    pub(crate) fn blank_record(reviewer_id: &str, condition: Condition) -> Record {
        Record {
            reviewer_id: reviewer_id.to_owned(),
            condition,
            semester: "2025F".to_owned(),
            comparative_references: None,
            total_words: None,
            mean_words_per_comment: None,
            rubric_criteria_addressed: None,
            rubric_coverage_ratio: None,
            comparative_reference_rate: None,
            score_mean: None,
            score_sd: None,
            score_range: None,
        }
    }
}
