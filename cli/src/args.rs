use clap::{Parser, Subcommand};
use collabpath_core::config::{BackoffKind, Config};
use std::{path::PathBuf, time::Duration};

#[derive(Parser, Debug)]
#[command(name = "collabpath")]
#[command(about = "Find how two music artists are connected through the tracks they share")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Adjacency cache file (overrides CSV_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// Seconds between catalog requests (overrides RATE_LIMIT_DELAY)
    #[arg(long, global = true, value_name = "SECONDS")]
    pub rate_limit: Option<f64>,

    /// Attempts per catalog request (overrides MAX_RETRIES)
    #[arg(long, global = true, value_name = "COUNT")]
    pub max_retries: Option<u32>,

    /// Seconds to wait before retrying a failed request (overrides RETRY_DELAY)
    #[arg(long, global = true, value_name = "SECONDS")]
    pub retry_delay: Option<f64>,

    /// Retry delay strategy: fixed, exponential or jittered (overrides RETRY_BACKOFF)
    #[arg(long, global = true, value_name = "KIND")]
    pub backoff: Option<BackoffKind>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and info-level logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a collaboration path between two artists
    Path {
        /// First artist name
        artist1: String,

        /// Second artist name
        artist2: String,

        /// Search algorithm: bfs (shortest) or dfs (any path)
        #[arg(short, long, default_value = "bfs")]
        algorithm: String,

        /// Hide artist URLs from output (URLs shown by default)
        #[arg(short = 'u', long)]
        hide_urls: bool,

        /// Quiet mode - only show the path flow
        #[arg(short, long)]
        quiet: bool,
    },

    /// Fetch one artist's collaborators into the cache
    Expand {
        /// Artist name
        artist: String,
    },

    /// Show an artist's catalog details and cache status
    Info {
        /// Artist name
        artist: String,
    },

    /// Suggest artists matching a partial name
    Suggest {
        /// Partial artist name
        query: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show statistics about the cached collaboration graph
    Stats,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Path { .. } => "path",
            Command::Expand { .. } => "expand",
            Command::Info { .. } => "info",
            Command::Suggest { .. } => "suggest",
            Command::Stats => "stats",
        }
    }
}

impl Args {
    /// Applies command-line overrides on top of the environment configuration.
    pub fn apply_overrides(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(path) = &self.cache_file {
            config.cache_path = path.clone();
        }
        if let Some(seconds) = self.rate_limit {
            config.client.rate_limit_delay = seconds_to_duration("--rate-limit", seconds)?;
        }
        if let Some(max_retries) = self.max_retries {
            config.client.max_retries = max_retries;
        }
        if let Some(seconds) = self.retry_delay {
            config.client.retry_delay = seconds_to_duration("--retry-delay", seconds)?;
        }
        if let Some(backoff) = self.backoff {
            config.client.backoff = backoff;
        }
        Ok(())
    }
}

fn seconds_to_duration(flag: &str, seconds: f64) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| anyhow::anyhow!("{flag} must be a non-negative number of seconds, got {seconds}"))
}
