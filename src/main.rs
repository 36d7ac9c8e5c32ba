//! CLI entry point for the shelter gap analysis tool.
//!
//! Provides subcommands for materializing the sample San Diego datasets
//! and for running the descriptive analysis over them.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shelter_gap::analyzers;
use shelter_gap::download::{self, DatasetSelection};
use shelter_gap::records::{EvictionRecord, RegionCount, ShelterRecord};
use shelter_gap::report;
use shelter_gap::store::{DatasetStore, StoreError};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "shelter_gap")]
#[command(about = "A tool to analyze San Diego homelessness and eviction data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Materialize the sample datasets plus metadata and a summary
    Download {
        /// Which dataset to materialize
        #[arg(short = 's', long, value_enum, default_value = "all")]
        dataset: DatasetSelection,

        /// Base directory for datasets and artifacts
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Analyze the downloaded datasets and export a summary report
    Analyze {
        /// Base directory holding the downloaded datasets
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Where to write the condensed report (default: <data-dir>/analysis_summary.txt)
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
}

fn main() {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        match err.downcast_ref::<StoreError>() {
            Some(StoreError::NotFound { path }) => {
                error!(
                    path = %path.display(),
                    "Required input file is missing; run the `download` subcommand first"
                );
            }
            _ => {
                error!(error = %err, "Run failed");
            }
        }
        std::process::exit(1);
    }
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/shelter_gap.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("shelter_gap.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    file_guard
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Download { dataset, data_dir } => {
            let store = DatasetStore::new(&data_dir);
            download::run(&store, dataset)?;
            println!(
                "Data download complete. Check {} for the datasets.",
                data_dir.display()
            );
        }
        Commands::Analyze { data_dir, report } => {
            let store = DatasetStore::new(&data_dir);
            let report_path =
                report.unwrap_or_else(|| store.base_dir().join("analysis_summary.txt"));
            analyze(&store, &report_path)?;
        }
    }

    Ok(())
}

/// Loads all three tables, prints the full report, and exports the
/// condensed summary.
#[tracing::instrument(skip(store, report_path))]
fn analyze(store: &DatasetStore, report_path: &Path) -> Result<()> {
    let shelters: Vec<ShelterRecord> = store.load()?;
    let regions: Vec<RegionCount> = store.load()?;
    let evictions: Vec<EvictionRecord> = store.load()?;
    info!(
        shelters = shelters.len(),
        regions = regions.len(),
        evictions = evictions.len(),
        "Datasets loaded"
    );

    let full_report = analyzers::build_report(&shelters, &regions, &evictions)?;
    println!("{}", full_report.render());

    let condensed = analyzers::summary::condensed_report(&shelters, &regions, &evictions);
    let path = report::export(&condensed, report_path)?;
    info!(path = %path.display(), "Summary report saved");
    println!("Summary report saved to {}", path.display());

    Ok(())
}
