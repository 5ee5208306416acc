//! Single-predictor logistic regression on two-group binary counts.
//!
//! Fits `logit P(positive) = b0 + b1 * treatment` by Newton–Raphson on the
//! aggregated group counts (the counts are the sufficient statistics for this
//! model, so the fit is identical to one over the individual records).
//! Baseline is the reference level: `exp(b0)` is the baseline odds and
//! `exp(b1)` the treatment-vs-baseline odds ratio.
//!
//! The fit returns an explicit error for inputs where the maximum-likelihood
//! estimate does not exist (an empty group, or a group with all-positive or
//! all-negative outcomes, i.e. perfect separation) so the caller can omit the
//! model-dependent outputs visibly instead of reporting infinite estimates.

use derive_more::{Display, Error};

const MAX_ITERATIONS: usize = 50;
const GRADIENT_TOLERANCE: f64 = 1e-10;

/// Wald z multiplier for a 95% confidence interval.
const Z_95: f64 = 1.96;

/// Binary outcome counts for one condition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCounts {
    /// Number of records in the group.
    pub n: usize,
    /// Number of records with a positive outcome.
    pub positive: usize,
}

impl GroupCounts {
    /// Proportion of positive outcomes, `None` for an empty group.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn proportion(&self) -> Option<f64> {
        if self.n == 0 {
            return None;
        }
        Some(self.positive as f64 / self.n as f64)
    }
}

/// One fitted coefficient with its Wald standard error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficient {
    /// Maximum-likelihood estimate on the log-odds scale.
    pub estimate: f64,
    /// Wald standard error from the inverse observed information.
    pub std_error: f64,
}

impl Coefficient {
    /// Exponentiated estimate (odds, or odds ratio for the contrast).
    #[must_use]
    pub fn odds_ratio(&self) -> f64 {
        self.estimate.exp()
    }

    /// Exponentiated 95% Wald interval, `estimate ± 1.96 · SE`.
    #[must_use]
    pub fn wald_ci_95(&self) -> (f64, f64) {
        let margin = Z_95 * self.std_error;
        ((self.estimate - margin).exp(), (self.estimate + margin).exp())
    }
}

/// A fitted two-group logistic model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionLogit {
    /// Intercept: log-odds of a positive outcome in the baseline group.
    pub intercept: Coefficient,
    /// Treatment-vs-baseline contrast: log odds ratio.
    pub contrast: Coefficient,
    /// Newton–Raphson iterations used.
    pub iterations: usize,
}

/// Reasons a logistic fit can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LogitFitError {
    /// A condition group contained no records.
    #[display("a condition group is empty")]
    EmptyGroup,
    /// A group's outcomes are all positive or all negative, so the
    /// maximum-likelihood estimate is infinite (perfect separation).
    #[display("degenerate outcome counts (all-positive or all-negative group)")]
    PerfectSeparation,
    /// Newton–Raphson did not converge within the iteration budget.
    #[display("fit did not converge after {iterations} iterations")]
    NotConverged {
        /// Iterations attempted before giving up.
        iterations: usize,
    },
}

/// Fits the logistic model of a binary outcome on condition.
///
/// # Examples
///
/// ```
/// # use revstat_stats::logistic::{GroupCounts, fit_condition_logit};
/// let baseline = GroupCounts { n: 10, positive: 2 };
/// let treatment = GroupCounts { n: 10, positive: 6 };
///
/// let fit = fit_condition_logit(baseline, treatment).unwrap();
/// // Closed-form 2x2 odds ratio: (6 * 8) / (4 * 2) = 6.
/// assert!((fit.contrast.odds_ratio() - 6.0).abs() < 1e-6);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn fit_condition_logit(
    baseline: GroupCounts,
    treatment: GroupCounts,
) -> Result<ConditionLogit, LogitFitError> {
    for group in [baseline, treatment] {
        if group.n == 0 {
            return Err(LogitFitError::EmptyGroup);
        }
        if group.positive == 0 || group.positive == group.n {
            return Err(LogitFitError::PerfectSeparation);
        }
    }

    let (n0, k0) = (baseline.n as f64, baseline.positive as f64);
    let (n1, k1) = (treatment.n as f64, treatment.positive as f64);

    // Newton–Raphson on (b0, b1). The gradient is the score of the grouped
    // binomial likelihood; the Hessian is the 2x2 observed information.
    let mut b0 = 0.0;
    let mut b1 = 0.0;

    for iteration in 1..=MAX_ITERATIONS {
        let p0 = sigmoid(b0);
        let p1 = sigmoid(b0 + b1);

        let g0 = (k0 - n0 * p0) + (k1 - n1 * p1);
        let g1 = k1 - n1 * p1;

        if g0.abs() < GRADIENT_TOLERANCE && g1.abs() < GRADIENT_TOLERANCE {
            // Inverse information: var(b0) = 1/w0, var(b1) = 1/w0 + 1/w1.
            let w0 = n0 * p0 * (1.0 - p0);
            let w1 = n1 * p1 * (1.0 - p1);
            return Ok(ConditionLogit {
                intercept: Coefficient {
                    estimate: b0,
                    std_error: w0.recip().sqrt(),
                },
                contrast: Coefficient {
                    estimate: b1,
                    std_error: (w0.recip() + w1.recip()).sqrt(),
                },
                iterations: iteration - 1,
            });
        }

        let w0 = n0 * p0 * (1.0 - p0);
        let w1 = n1 * p1 * (1.0 - p1);
        // H = [[w0 + w1, w1], [w1, w1]], det = w0 * w1.
        let det = w0 * w1;
        if !(det.is_finite() && det > 0.0) {
            return Err(LogitFitError::NotConverged { iterations: iteration });
        }
        b0 += (w1 * g0 - w1 * g1) / det;
        b1 += (-w1 * g0 + (w0 + w1) * g1) / det;
    }

    Err(LogitFitError::NotConverged {
        iterations: MAX_ITERATIONS,
    })
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_form_two_by_two() {
        // The MLE of the saturated 2x2 model is the observed log odds.
        let fit = fit_condition_logit(
            GroupCounts { n: 10, positive: 2 },
            GroupCounts { n: 10, positive: 6 },
        )
        .unwrap();

        let intercept = (2.0_f64 / 8.0).ln();
        let contrast = 6.0_f64.ln();
        assert!((fit.intercept.estimate - intercept).abs() < 1e-8);
        assert!((fit.contrast.estimate - contrast).abs() < 1e-8);
        assert!((fit.contrast.odds_ratio() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_wald_standard_errors() {
        let fit = fit_condition_logit(
            GroupCounts { n: 10, positive: 2 },
            GroupCounts { n: 10, positive: 6 },
        )
        .unwrap();

        // Closed form: sqrt(1/2 + 1/8) and sqrt(1/2 + 1/8 + 1/6 + 1/4).
        let se_intercept = (1.0_f64 / 2.0 + 1.0 / 8.0).sqrt();
        let se_contrast = (1.0_f64 / 2.0 + 1.0 / 8.0 + 1.0 / 6.0 + 1.0 / 4.0).sqrt();
        assert!((fit.intercept.std_error - se_intercept).abs() < 1e-8);
        assert!((fit.contrast.std_error - se_contrast).abs() < 1e-8);

        // These counts do not support a significant contrast: the Wald
        // interval for the odds ratio must straddle 1.
        let (lo, hi) = fit.contrast.wald_ci_95();
        assert!(lo < 1.0 && 1.0 < hi);
        assert!(lo < fit.contrast.odds_ratio() && fit.contrast.odds_ratio() < hi);
    }

    #[test]
    fn test_significant_contrast_excludes_one() {
        let fit = fit_condition_logit(
            GroupCounts {
                n: 100,
                positive: 20,
            },
            GroupCounts {
                n: 100,
                positive: 60,
            },
        )
        .unwrap();
        let (lo, _hi) = fit.contrast.wald_ci_95();
        assert!(lo > 1.0);
    }

    #[test]
    fn test_empty_group_is_an_error() {
        let err = fit_condition_logit(
            GroupCounts { n: 0, positive: 0 },
            GroupCounts { n: 10, positive: 5 },
        )
        .unwrap_err();
        assert_eq!(err, LogitFitError::EmptyGroup);
    }

    #[test]
    fn test_perfect_separation_is_an_error() {
        let err = fit_condition_logit(
            GroupCounts { n: 10, positive: 0 },
            GroupCounts { n: 10, positive: 5 },
        )
        .unwrap_err();
        assert_eq!(err, LogitFitError::PerfectSeparation);

        let err = fit_condition_logit(
            GroupCounts { n: 10, positive: 4 },
            GroupCounts {
                n: 10,
                positive: 10,
            },
        )
        .unwrap_err();
        assert_eq!(err, LogitFitError::PerfectSeparation);
    }

    #[test]
    fn test_proportion() {
        let group = GroupCounts { n: 10, positive: 6 };
        assert_eq!(group.proportion(), Some(0.6));
        assert_eq!(GroupCounts { n: 0, positive: 0 }.proportion(), None);
    }
}
