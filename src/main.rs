use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sentseg::{driver, SentenceDetector};

#[derive(Parser, Debug)]
#[command(name = "sentseg")]
#[command(about = "Split a text file into sentences, printed one per line")]
#[command(version)]
struct Args {
    /// Text file to segment
    input: PathBuf,
}

fn main() -> Result<()> {
    // WHY: stdout carries only sentences, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let detector = SentenceDetector::with_default_rules()
        .context("Failed to build sentence detector")?;

    let stdout = io::stdout();
    let written = driver::run(&args.input, &detector, stdout.lock())
        .with_context(|| format!("Failed to segment {}", args.input.display()))?;

    info!("Wrote {} sentences", written);
    Ok(())
}
