mod cli;
mod config;
mod platform;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::ScoutConfig;
use crate::platform::logging::{self, LogDestination};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ScoutConfig::from_cli(&cli);

    let destination = if config.verbose {
        LogDestination::Both
    } else {
        LogDestination::File
    };
    logging::initialize(destination, &config.data_dir);

    platform::run(cli.command.unwrap_or(Command::Shell), &config)
}
