mod input;
mod model;
mod report;
mod stats;

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::input::LoadError;
use crate::report::ReportStyle;
use crate::stats::StatsError;

/// Variance screening over mine-site and background geochemical samples.
///
/// Loads a `;`-separated sample dataset, computes per-group sample
/// variances of the measured trace elements and the mine/background
/// F-distribution ratios, and prints three tables to stdout.
#[derive(Parser, Debug)]
#[command(name = "geovar", version, about)]
struct Cli {
    /// Path to the sample dataset
    #[arg(long, default_value = "dataset/dataset.csv")]
    input: PathBuf,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to load dataset: {0}")]
    Load(#[from] LoadError),
    #[error("failed to compute statistics: {0}")]
    Stats(#[from] StatsError),
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut dataset = input::load_path(&cli.input)?;
    stats::compute_variances(&mut dataset)?;
    stats::compute_ratios(&mut dataset)?;

    let style = ReportStyle::default();
    println!("{}", report::render_dataset(&dataset, &style));
    println!("{}", report::render_variances(&dataset, &style));
    if let Some(ratios) = dataset.ratios {
        println!("{}", report::render_ratios(ratios, &style));
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
