use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod analytics;
mod config;
mod dataset;
mod grouping;
mod models;
mod report;


use crate::analytics::AnalyticsEngine;
use crate::config::{OutputFormat, load_config};

#[derive(Parser)]
#[command(name = "listening-insights")]
#[command(about = "Artist, genre and playlist insights from song listening records")]
#[command(version)]
struct Args {
    /// Path to a JSON array of listening records (defaults to the built-in dataset)
    #[arg(short = 'd', long = "data")]
    data_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load configuration from .env
    let config = load_config()?;
    let format = config.resolve_format(args.format);

    let records = match config.resolve_data_path(args.data_file) {
        Some(path) => dataset::load_from_file(&path)
            .with_context(|| format!("Failed to load dataset '{}'", path.display()))?,
        None => dataset::builtin().context("Failed to load built-in dataset")?,
    };

    let report = AnalyticsEngine::new(&records).run();
    let rendered = report::render(&report, format, chrono::Local::now())
        .context("Failed to render report")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
