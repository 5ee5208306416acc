//! Comparative-reference flag: contingency summary and logistic association.
//!
//! The binary outcome is derived per record: did the reviewer make any
//! comparative reference (`comparative_references > 0`)? The contingency
//! table is always produced; the logistic model can fail as a unit
//! (separation, empty group, non-convergence), in which case the caller
//! receives an explicit [`LogitFitError`] and omits the odds-ratio table
//! visibly instead of aborting the other tables.

use revstat_stats::logistic::{self, ConditionLogit, GroupCounts, LogitFitError};

use crate::dataset::{CONDITIONS, Condition, ReviewerDataset};

/// One row of the binary-flag contingency table.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyRow {
    /// Condition group.
    pub condition: Condition,
    /// Number of records in the group.
    pub n: usize,
    /// Records with at least one comparative reference.
    pub n_positive: usize,
    /// Proportion of positive records (`None` for an empty group, which
    /// validation rules out in practice).
    pub proportion_positive: Option<f64>,
}

/// Model terms of the fitted association model.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsRatioRow {
    /// Term label: `intercept` or the treatment contrast.
    pub term: &'static str,
    /// Exponentiated coefficient.
    pub odds_ratio: f64,
    /// Lower 95% Wald bound.
    pub ci_lo: f64,
    /// Upper 95% Wald bound.
    pub ci_hi: f64,
}

/// Term label for the intercept row.
pub const TERM_INTERCEPT: &str = "intercept";
/// Term label for the nudge-vs-baseline contrast row.
pub const TERM_NUDGE: &str = "condition[nudge]";

/// Tabulates the comparative-reference flag per condition.
#[must_use]
pub fn comparative_flag_by_condition(dataset: &ReviewerDataset) -> Vec<ContingencyRow> {
    CONDITIONS
        .iter()
        .map(|&condition| {
            let counts = group_counts(dataset, condition);
            ContingencyRow {
                condition,
                n: counts.n,
                n_positive: counts.positive,
                proportion_positive: counts.proportion(),
            }
        })
        .collect()
}

/// Fits the logistic association model of the flag on condition.
///
/// # Errors
///
/// Returns the underlying [`LogitFitError`] when the maximum-likelihood
/// estimate does not exist or the fit fails to converge. The error is meant
/// to be consumed by the reporting stage as a visible branch: log it and omit
/// the odds-ratio output, leaving every other table untouched.
pub fn fit_comparative_association(
    dataset: &ReviewerDataset,
) -> Result<ConditionLogit, LogitFitError> {
    logistic::fit_condition_logit(
        group_counts(dataset, Condition::Baseline),
        group_counts(dataset, Condition::Nudge),
    )
}

fn group_counts(dataset: &ReviewerDataset, condition: Condition) -> GroupCounts {
    let mut n = 0;
    let mut positive = 0;
    for record in dataset.records_in(condition) {
        n += 1;
        if record.any_comparative() {
            positive += 1;
        }
    }
    GroupCounts { n, positive }
}

/// Expands a fitted model into odds-ratio rows, intercept first.
#[must_use]
pub fn odds_ratio_rows(fit: &ConditionLogit) -> Vec<OddsRatioRow> {
    [(TERM_INTERCEPT, fit.intercept), (TERM_NUDGE, fit.contrast)]
        .into_iter()
        .map(|(term, coefficient)| {
            let (ci_lo, ci_hi) = coefficient.wald_ci_95();
            OddsRatioRow {
                term,
                odds_ratio: coefficient.odds_ratio(),
                ci_lo,
                ci_hi,
            }
        })
        .collect()
}
