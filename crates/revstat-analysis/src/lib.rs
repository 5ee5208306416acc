//! Reviewer-level comparative analysis for a two-cohort peer-review study.
//!
//! This crate turns a validated dataset of reviewer records into the study's
//! output tables. The study compares a `baseline` cohort against a `nudge`
//! (treatment) cohort on a fixed set of continuous feedback metrics,
//! reporting every difference as nudge − baseline.
//!
//! # Overview
//!
//! The analysis runs five independent consumers over one read-only dataset:
//!
//! 1. **Validate** ([`dataset::ReviewerDataset`]): typed records in, checked
//!    for the two required condition levels; downstream code only ever sees a
//!    validated dataset
//! 2. **Summarize** ([`summary`]): per (condition, metric) descriptive rows
//! 3. **Effect sizes** ([`effects`]): Hedges' g plus percentile-bootstrap
//!    confidence intervals per metric, driven by one seeded generator
//! 4. **Sensitivity** ([`sensitivity`]): Mann–Whitney rank checks per metric
//! 5. **Association** ([`association`]): comparative-reference flag
//!    contingency and a condition logistic model with Wald odds ratios
//!
//! No consumer depends on another's output; a degenerate metric produces
//! undefined cells in its own rows and nothing else. Only the association
//! model can fail as a unit, and it does so with an explicit [`Result`] the
//! caller must branch on.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use revstat_analysis::{
//!     dataset::{Condition, Record, ReviewerDataset},
//!     effects, summary,
//! };
//!
//! # fn records() -> Vec<Record> {
//! #     let blank = |id: &str, condition| Record {
//! #         reviewer_id: id.to_owned(),
//! #         condition,
//! #         semester: "2025F".to_owned(),
//! #         comparative_references: None,
//! #         total_words: None,
//! #         mean_words_per_comment: None,
//! #         rubric_criteria_addressed: None,
//! #         rubric_coverage_ratio: None,
//! #         comparative_reference_rate: None,
//! #         score_mean: None,
//! #         score_sd: None,
//! #         score_range: None,
//! #     };
//! #     let mut records = vec![];
//! #     for i in 0..5 {
//! #         let mut r = blank("b", Condition::Baseline);
//! #         r.total_words = Some(f64::from(i) * 10.0);
//! #         records.push(r);
//! #         let mut r = blank("n", Condition::Nudge);
//! #         r.total_words = Some(f64::from(i) * 10.0 + 50.0);
//! #         records.push(r);
//! #     }
//! #     records
//! # }
//! let dataset = ReviewerDataset::validate(records())?;
//!
//! let descriptives = summary::descriptives_by_condition(&dataset);
//! let effect_sizes = effects::effect_sizes(&dataset);
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(20260209);
//! let intervals = effects::bootstrap_intervals(&dataset, 1000, &mut rng);
//! assert_eq!(effect_sizes.len(), intervals.len());
//! # Ok::<(), revstat_analysis::dataset::DatasetError>(())
//! ```

pub mod association;
pub mod dataset;
pub mod effects;
pub mod metric;
pub mod sensitivity;
pub mod summary;
