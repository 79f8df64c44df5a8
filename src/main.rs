use anyhow::Context;
use clap::Parser;
use log::info;
use pop_trends::utils::logging::console::{print_report_summary, print_top_changes};
use pop_trends::{Pipeline, PipelineConfig};
use std::path::PathBuf;
use std::time::Instant;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "pop-trends")]
#[command(about = "Forecast and rank regional population trends")]
struct Args {
    /// Population table (.csv or .parquet)
    input: PathBuf,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = PipelineConfig::from_env();
    info!("{config}");

    let start = Instant::now();
    let report = Pipeline::new(config)
        .run_path(&args.input)
        .with_context(|| format!("Failed to analyse {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report_summary(&report, start.elapsed());
        print_top_changes(&report, 10);
    }

    Ok(())
}
