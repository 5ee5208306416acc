//! Plain-text model summary report
//!
//! Written alongside the CSV tables whenever the association model fits, so
//! the coefficient scale (log-odds) stays available next to the exponentiated
//! table.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::Context;
use chrono::Local;
use revstat_analysis::association::{ContingencyRow, OddsRatioRow};
use revstat_stats::logistic::ConditionLogit;

pub(super) fn save_model_summaries(
    dir: &Path,
    contingency: &[ContingencyRow],
    fit: &ConditionLogit,
    or_rows: &[OddsRatioRow],
) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create models directory: {}", dir.display()))?;
    let path = dir.join("model_summaries.txt");

    let text = render_model_summaries(contingency, fit, or_rows)
        .context("Failed to render model summary report")?;

    fs::write(&path, text)
        .with_context(|| format!("Failed to write model summary file: {}", path.display()))?;
    println!("  Model summary saved to: {}", path.display());

    Ok(())
}

fn render_model_summaries(
    contingency: &[ContingencyRow],
    fit: &ConditionLogit,
    or_rows: &[OddsRatioRow],
) -> Result<String, std::fmt::Error> {
    let mut text = String::new();

    writeln!(text, "Logistic regression: any_comparative ~ condition")?;
    writeln!(text, "{}", "=".repeat(48))?;
    writeln!(text, "Fitted: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(text, "Converged after {} Newton iterations", fit.iterations)?;
    writeln!(text)?;

    writeln!(text, "Group counts:")?;
    for row in contingency {
        writeln!(
            text,
            "  {:<10} n={:<5} positive={:<5} proportion={}",
            row.condition,
            row.n,
            row.n_positive,
            super::table::cell(row.proportion_positive),
        )?;
    }
    writeln!(text)?;

    writeln!(
        text,
        "{:<18} {:>12} {:>12} {:>12} {:>24}",
        "term", "estimate", "std_error", "odds_ratio", "95% Wald CI (OR scale)",
    )?;
    let coefficients = [&fit.intercept, &fit.contrast];
    for (coefficient, row) in coefficients.iter().zip(or_rows) {
        writeln!(
            text,
            "{:<18} {:>12.6} {:>12.6} {:>12.6} [{:>9.6}, {:>9.6}]",
            row.term,
            coefficient.estimate,
            coefficient.std_error,
            row.odds_ratio,
            row.ci_lo,
            row.ci_hi,
        )?;
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use revstat_analysis::{
        association::{TERM_INTERCEPT, TERM_NUDGE},
        dataset::Condition,
    };
    use revstat_stats::logistic::Coefficient;

    use super::*;

    #[test]
    fn test_report_names_both_terms() {
        let contingency = vec![
            ContingencyRow {
                condition: Condition::Baseline,
                n: 10,
                n_positive: 2,
                proportion_positive: Some(0.2),
            },
            ContingencyRow {
                condition: Condition::Nudge,
                n: 10,
                n_positive: 6,
                proportion_positive: Some(0.6),
            },
        ];
        let fit = ConditionLogit {
            intercept: Coefficient {
                estimate: -1.386_294,
                std_error: 0.790_569,
            },
            contrast: Coefficient {
                estimate: 1.791_759,
                std_error: 1.004_987,
            },
            iterations: 6,
        };
        let or_rows = vec![
            OddsRatioRow {
                term: TERM_INTERCEPT,
                odds_ratio: 0.25,
                ci_lo: 0.053,
                ci_hi: 1.178,
            },
            OddsRatioRow {
                term: TERM_NUDGE,
                odds_ratio: 6.0,
                ci_lo: 0.837,
                ci_hi: 43.0,
            },
        ];

        let text = render_model_summaries(&contingency, &fit, &or_rows).unwrap();
        assert!(text.contains("any_comparative ~ condition"));
        assert!(text.contains("baseline"));
        assert!(text.contains(TERM_NUDGE));
        assert!(text.contains("6 Newton iterations"));
    }
}
