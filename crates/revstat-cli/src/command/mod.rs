use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::analyze::AnalyzeArg;

mod analyze;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run the two-cohort comparative analysis and write the output tables
    Analyze(#[clap(flatten)] AnalyzeArg),
}

pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}
