pub mod app;
pub mod effects;
pub mod logging;
pub mod persistence;
pub mod ui;

use std::io::{self, BufRead, Write};

use scout_core::Msg;
use scout_logging::scout_info;

use crate::cli::Command;
use crate::config::ScoutConfig;
use app::Session;
use ui::commands::ShellCommand;

/// Opens a session and runs one command against it.
pub fn run(command: Command, config: &ScoutConfig) -> anyhow::Result<()> {
    scout_info!(
        "Starting scout against {} (sample fallback {})",
        config.backend.base_url,
        if config.fallback.is_enabled() { "on" } else { "off" }
    );
    let mut session = Session::open(config)?;
    let stdout = io::stdout();

    let shell_command = match command {
        Command::Shell => {
            let stdin = io::stdin();
            app::run_shell(&mut session, stdin.lock(), stdout.lock())?;
            return Ok(());
        }
        Command::Search {
            query,
            source,
            level,
        } => {
            session.dispatch(Msg::SourceFilterChanged(source));
            session.dispatch(Msg::LevelFilterChanged(level));
            ShellCommand::Search(query.join(" "))
        }
        Command::Recommend => ShellCommand::Recommend,
        Command::Saved => ShellCommand::Saved,
        Command::Stats => ShellCommand::Stats,
        Command::Clear { yes } => {
            if !yes && !confirm("Clear all favorites? [y/N] ")? {
                return Ok(());
            }
            ShellCommand::Clear
        }
        Command::Email { address } => ShellCommand::Email(address),
    };

    let text = app::execute(&mut session, shell_command);
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;
    if let Some(notice) = session.take_notice() {
        out.write_all(notice.as_bytes())?;
    }
    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    let mut out = io::stdout();
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
