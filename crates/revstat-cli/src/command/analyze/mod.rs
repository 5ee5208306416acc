//! Comparative analysis command
//!
//! Loads the cleaned reviewer-level feature table, runs every analysis over
//! the validated dataset, and writes the output tables as CSV files plus a
//! plain-text model summary report.

mod report;
mod table;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use revstat_analysis::{
    association,
    dataset::{Record, ReviewerDataset},
    effects, sensitivity, summary,
};
use revstat_stats::bootstrap;
use tracing::warn;

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the cleaned reviewer-level features JSON file
    pub features: PathBuf,

    /// Output directory for the CSV tables
    #[arg(long, default_value = "results/tables")]
    pub tables_dir: PathBuf,

    /// Output directory for the model summary report
    #[arg(long, default_value = "results/models")]
    pub models_dir: PathBuf,

    /// Seed for the analysis-wide random number generator
    #[arg(long, default_value_t = 20260209)]
    pub seed: u64,

    /// Number of bootstrap resamples per metric
    #[arg(long, default_value_t = bootstrap::DEFAULT_RESAMPLES)]
    pub resamples: usize,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let records: Vec<Record> = util::read_json_file("reviewer features", &arg.features)?;
    println!(
        "Loaded {} reviewer records from {}",
        records.len(),
        arg.features.display()
    );

    let dataset = ReviewerDataset::validate(records)?;

    fs::create_dir_all(&arg.tables_dir).with_context(|| {
        format!(
            "Failed to create tables directory: {}",
            arg.tables_dir.display()
        )
    })?;

    // One generator drives every bootstrap draw, so a fixed seed reproduces
    // the whole run.
    let mut rng = Pcg64::seed_from_u64(arg.seed);

    save_table(
        &arg.tables_dir,
        "table_descriptives_by_condition.csv",
        &table::descriptives_csv(&summary::descriptives_by_condition(&dataset))?,
    )?;
    save_table(
        &arg.tables_dir,
        "table_effect_sizes_by_condition.csv",
        &table::effect_sizes_csv(&effects::effect_sizes(&dataset))?,
    )?;
    save_table(
        &arg.tables_dir,
        "table_bootstrap_ci_by_condition.csv",
        &table::bootstrap_csv(&effects::bootstrap_intervals(
            &dataset,
            arg.resamples,
            &mut rng,
        ))?,
    )?;
    save_table(
        &arg.tables_dir,
        "table_wilcoxon_sensitivity.csv",
        &table::sensitivity_csv(&sensitivity::rank_sensitivity(&dataset))?,
    )?;

    let contingency = association::comparative_flag_by_condition(&dataset);
    save_table(
        &arg.tables_dir,
        "table_comparative_flag_by_condition.csv",
        &table::contingency_csv(&contingency)?,
    )?;

    // The association model is the only unit that can fail as a whole. Its
    // outputs are omitted visibly; every other table is already on disk.
    match association::fit_comparative_association(&dataset) {
        Ok(fit) => {
            let or_rows = association::odds_ratio_rows(&fit);
            save_table(
                &arg.tables_dir,
                "table_comparative_association_or.csv",
                &table::odds_ratio_csv(&or_rows)?,
            )?;
            report::save_model_summaries(&arg.models_dir, &contingency, &fit, &or_rows)?;
        }
        Err(err) => {
            warn!(%err, "comparative association model not fitted; odds-ratio table omitted");
        }
    }

    println!("Analysis complete");
    Ok(())
}

fn save_table(dir: &Path, file_name: &str, content: &str) -> anyhow::Result<()> {
    let path = dir.join(file_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write table file: {}", path.display()))?;
    println!("  Table saved to: {}", path.display());
    Ok(())
}
