use std::path::PathBuf;

use adspend_core::config::Settings;
use adspend_core::{datasets, pipeline, writer};
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Advertising-spend CSV ETL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the dataset pipelines and write their output CSVs.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path to the TOML settings file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Run a single dataset instead of both.
    #[arg(long, value_enum)]
    dataset: Option<Dataset>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Dataset {
    Pathmatics,
    Vivvix,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let settings = Settings::load(&args.config)?;
    let paths = &settings.paths;

    let mut runs = Vec::new();
    if args.dataset.map_or(true, |d| d == Dataset::Pathmatics) {
        runs.push((datasets::pathmatics(paths), paths.output_pathmatics.clone()));
    }
    if args.dataset.map_or(true, |d| d == Dataset::Vivvix) {
        runs.push((datasets::vivvix(paths), paths.output_vivvix.clone()));
    }

    // Datasets run strictly one after another; a failed run is logged and
    // does not stop the next one.
    for (spec, output) in runs {
        match pipeline::run(&spec) {
            Ok(table) => writer::write_output(&table, &output),
            Err(e) => error!(dataset = spec.name, error = %e, "dataset pipeline failed"),
        }
    }

    info!("all dataset runs finished");
    Ok(())
}
