use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scout_core::{LevelFilter, SourceFilter};

#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(about = "Search, save and review GitHub projects, research papers and datasets")]
pub struct Cli {
    /// Base url of the aggregation backend
    #[arg(long, env = "SCOUT_BACKEND_URL", default_value = "http://localhost:8000", global = true)]
    pub backend_url: String,
    /// Directory holding favorites, the profile email and the log file
    #[arg(long, env = "SCOUT_DATA_DIR", default_value = ".scout", global = true)]
    pub data_dir: PathBuf,
    /// Show labelled sample items when papers or datasets come back empty (on/off)
    #[arg(
        long,
        env = "SCOUT_SAMPLE_FALLBACK",
        default_value = "on",
        action = clap::ArgAction::Set,
        value_parser = parse_switch,
        global = true
    )]
    pub sample_fallback: bool,
    /// Per-request timeout in seconds
    #[arg(long, env = "SCOUT_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,
    /// Also log to the terminal
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive session (default)
    Shell,
    /// Search projects, papers and datasets
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
        /// all, github, paper or dataset
        #[arg(long, default_value = "all", value_parser = parse_source)]
        source: SourceFilter,
        /// all, easy, intermediate or advanced
        #[arg(long, default_value = "all", value_parser = parse_level)]
        level: LevelFilter,
    },
    /// Recommendations for the stored profile email
    Recommend,
    /// List saved favorites
    Saved,
    /// Summary statistics over saved favorites
    Stats,
    /// Remove every saved favorite
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Store the profile email used for recommendations
    Email {
        address: String,
    },
}

pub fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(format!("expected on or off, got {other:?}")),
    }
}

pub fn parse_source(raw: &str) -> Result<SourceFilter, String> {
    SourceFilter::parse(raw).ok_or_else(|| format!("unknown source {raw:?}"))
}

pub fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    LevelFilter::parse(raw).ok_or_else(|| format!("unknown level {raw:?}"))
}
