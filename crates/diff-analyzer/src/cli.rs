//! Command-line arguments and their mapping onto [`DiffConfig`].

use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use smart_diff::{DiffConfig, Granularity, DEFAULT_MAX_INPUT_CHARS};

#[derive(Debug, Parser)]
#[command(name = "diff-analyzer", version, about = "Diff and classify edits between two texts")]
pub struct Cli {
    /// Diff granularity; `auto` lets the change classifier decide
    #[arg(long, value_enum, default_value_t = GranularityArg::Auto, global = true)]
    pub granularity: GranularityArg,

    /// Reject inputs longer than this many characters
    #[arg(
        long,
        env = "DIFF_ANALYZER_MAX_INPUT",
        default_value_t = DEFAULT_MAX_INPUT_CHARS,
        global = true
    )]
    pub max_input_chars: usize,

    /// Accept inputs of any size, overriding `--max-input-chars`
    #[arg(long, global = true)]
    pub no_size_limit: bool,

    /// How long cached diffs stay valid, in seconds
    #[arg(long, env = "DIFF_ANALYZER_CACHE_TTL", default_value_t = 3600, global = true)]
    pub cache_ttl_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Diff two texts (prefix an argument with `@` to read it from a file)
    Diff {
        old: String,
        new: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Inline)]
        format: OutputFormat,
    },

    /// Print the change analysis for two texts as JSON
    Analyze { old: String, new: String },

    /// Read one JSON request per stdin line and answer each on stdout
    Stream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GranularityArg {
    Auto,
    #[value(alias = "char")]
    Character,
    Word,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Auto => Granularity::Auto,
            GranularityArg::Character => Granularity::Character,
            GranularityArg::Word => Granularity::Word,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `[-removed-]{+added+}` markup
    Inline,
    /// The JSON response envelope
    Json,
}

impl Cli {
    /// Build the service configuration from the parsed flags
    pub fn config(&self) -> DiffConfig {
        let max_input_chars = if self.no_size_limit {
            None
        } else {
            Some(self.max_input_chars)
        };

        DiffConfig::default()
            .granularity(self.granularity.into())
            .cache_ttl(Duration::from_secs(self.cache_ttl_secs))
            .max_input_chars(max_input_chars)
    }
}

/// Resolve a text argument, reading `@path` arguments from disk
pub fn resolve_text(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read text from {}", path))
        }
        None => Ok(arg.to_string()),
    }
}
