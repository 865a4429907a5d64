mod cli;
mod stream;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use smart_diff::{DiffResponse, DiffService, MemoryCache, TextDiff};

use crate::cli::{resolve_text, Cli, Command, OutputFormat};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine readable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();
    info!("starting diff-analyzer with {:?}", config);

    let service = DiffService::new(MemoryCache::new(), config);

    match cli.command {
        Command::Diff { old, new, format } => {
            let old = resolve_text(&old)?;
            let new = resolve_text(&new)?;
            let outcome = service.diff(&old, &new)?;

            match format {
                OutputFormat::Inline => {
                    let summary = outcome.summary();
                    println!("{}", TextDiff::render_inline(&outcome.segments));
                    eprintln!(
                        "{} diff: +{} -{} characters",
                        outcome.strategy, summary.added_chars, summary.removed_chars
                    );
                }
                OutputFormat::Json => {
                    let response = DiffResponse::from(outcome);
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
            }
        }
        Command::Analyze { old, new } => {
            let old = resolve_text(&old)?;
            let new = resolve_text(&new)?;
            let analysis = service.analyze(&old, &new)?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Stream => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            stream::run_stream(&service, stdin.lock(), stdout.lock())
                .context("Failed to process request stream")?;
        }
    }

    Ok(())
}
