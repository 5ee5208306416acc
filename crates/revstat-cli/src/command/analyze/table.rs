//! CSV rendering of the analysis tables
//!
//! Every table follows the same conventions: a header line, one row per
//! record, and the literal `NA` for cells whose statistic is undefined.

use std::fmt::Write as _;

use anyhow::Context;
use revstat_analysis::{
    association::{ContingencyRow, OddsRatioRow},
    effects::{BootstrapRow, EffectSizeRow},
    sensitivity::SensitivityRow,
    summary::DescriptiveRow,
};

/// Marker for an undefined cell.
const NA: &str = "NA";

pub(super) fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| NA.to_owned(), |v| v.to_string())
}

pub(super) fn descriptives_csv(rows: &[DescriptiveRow]) -> anyhow::Result<String> {
    let mut csv = String::from("condition,metric,n,mean,sd,median,iqr,min,max\n");
    for row in rows {
        writeln!(
            &mut csv,
            "{},{},{},{},{},{},{},{},{}",
            row.condition,
            row.metric,
            row.n,
            cell(row.mean),
            cell(row.sd),
            cell(row.median),
            cell(row.iqr),
            cell(row.min),
            cell(row.max),
        )
        .with_context(|| format!("Failed to render descriptives row for {}", row.metric))?;
    }
    Ok(csv)
}

pub(super) fn effect_sizes_csv(rows: &[EffectSizeRow]) -> anyhow::Result<String> {
    let mut csv = String::from("metric,hedges_g,mean_diff\n");
    for row in rows {
        writeln!(
            &mut csv,
            "{},{},{}",
            row.metric,
            cell(row.hedges_g),
            cell(row.mean_diff),
        )
        .with_context(|| format!("Failed to render effect-size row for {}", row.metric))?;
    }
    Ok(csv)
}

pub(super) fn bootstrap_csv(rows: &[BootstrapRow]) -> anyhow::Result<String> {
    let mut csv = String::from("metric,mean_diff,ci_lo,ci_hi\n");
    for row in rows {
        writeln!(
            &mut csv,
            "{},{},{},{}",
            row.metric,
            cell(row.mean_diff),
            cell(row.ci_lo),
            cell(row.ci_hi),
        )
        .with_context(|| format!("Failed to render bootstrap row for {}", row.metric))?;
    }
    Ok(csv)
}

pub(super) fn sensitivity_csv(rows: &[SensitivityRow]) -> anyhow::Result<String> {
    let mut csv = String::from("metric,statistic,p_value\n");
    for row in rows {
        writeln!(
            &mut csv,
            "{},{},{}",
            row.metric,
            cell(row.statistic),
            cell(row.p_value),
        )
        .with_context(|| format!("Failed to render sensitivity row for {}", row.metric))?;
    }
    Ok(csv)
}

pub(super) fn contingency_csv(rows: &[ContingencyRow]) -> anyhow::Result<String> {
    let mut csv = String::from("condition,n,n_positive,proportion_positive\n");
    for row in rows {
        writeln!(
            &mut csv,
            "{},{},{},{}",
            row.condition,
            row.n,
            row.n_positive,
            cell(row.proportion_positive),
        )
        .with_context(|| format!("Failed to render contingency row for {}", row.condition))?;
    }
    Ok(csv)
}

pub(super) fn odds_ratio_csv(rows: &[OddsRatioRow]) -> anyhow::Result<String> {
    let mut csv = String::from("term,odds_ratio,ci_lo,ci_hi\n");
    for row in rows {
        writeln!(
            &mut csv,
            "{},{},{},{}",
            row.term, row.odds_ratio, row.ci_lo, row.ci_hi,
        )
        .with_context(|| format!("Failed to render odds-ratio row for {}", row.term))?;
    }
    Ok(csv)
}
