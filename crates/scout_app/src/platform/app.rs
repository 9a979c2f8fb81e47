use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use scout_core::{update, AppState, FallbackPolicy, Msg};
use scout_engine::{EngineHandle, ReqwestBackend};
use scout_logging::scout_warn;

use super::effects::EffectRunner;
use super::persistence::LocalStores;
use super::ui::commands::{ShellCommand, HELP};
use super::ui::render;
use crate::config::ScoutConfig;

/// One front-end session: the pure state plus the runner that executes its effects.
///
/// Every message is applied to completion, including the messages its
/// effects answer with, before the next one is looked at.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
    response_wait: Duration,
}

impl Session {
    pub fn open(config: &ScoutConfig) -> anyhow::Result<Self> {
        let stores = LocalStores::open(&config.data_dir)?;
        let backend = ReqwestBackend::new(config.backend.clone())?;
        let engine = EngineHandle::new(Arc::new(backend))?;
        Ok(Self::new(
            EffectRunner::new(engine, stores),
            config.fallback,
            config.response_wait(),
        ))
    }

    pub fn new(runner: EffectRunner, fallback: FallbackPolicy, response_wait: Duration) -> Self {
        let mut session = Self {
            state: AppState::with_fallback(fallback),
            runner,
            response_wait,
        };
        for msg in session.runner.initial_messages() {
            session.dispatch(msg);
        }
        session.state.consume_dirty();
        session
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.runner.run(effects));
        }
    }

    /// Blocks until outstanding backend calls have answered or the wait runs out.
    pub fn settle(&mut self) {
        let deadline = Instant::now() + self.response_wait;
        loop {
            let view = self.state.view();
            if !view.searching && !view.recommendations_loading {
                break;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.runner.next_event(remaining) {
                Some(msg) => self.dispatch(msg),
                None => {
                    scout_warn!("Gave up waiting for the backend after {:?}", self.response_wait);
                    self.dispatch(Msg::ResponseTimedOut);
                    break;
                }
            }
        }
        self.pump();
    }

    /// Applies backend answers that have already arrived.
    pub fn pump(&mut self) {
        while let Some(msg) = self.runner.poll_event() {
            self.dispatch(msg);
        }
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.state
            .take_notification()
            .map(|notification| render::render_notification(&notification))
    }
}

/// Runs the interactive shell until `quit` or end of input.
pub fn run_shell(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    writeln!(output, "scout shell; type help for commands")?;
    let mut lines = input.lines();
    loop {
        write!(output, "scout> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        session.pump();
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };

        let text = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Clear => {
                write!(output, "Clear all favorites? [y/N] ")?;
                output.flush()?;
                let answer = lines.next().transpose()?.unwrap_or_default();
                if matches!(answer.trim(), "y" | "Y" | "yes") {
                    session.dispatch(Msg::ClearFavoritesConfirmed);
                }
                String::new()
            }
            other => execute(session, other),
        };

        output.write_all(text.as_bytes())?;
        if let Some(notice) = session.take_notice() {
            output.write_all(notice.as_bytes())?;
        }
    }
    Ok(())
}

/// Applies a non-interactive command and returns what to print.
pub fn execute(session: &mut Session, command: ShellCommand) -> String {
    match command {
        ShellCommand::Search(query) => {
            session.dispatch(Msg::QueryChanged(query));
            session.dispatch(Msg::SearchSubmitted);
            session.settle();
            render::render_results(&session.state().view())
        }
        ShellCommand::Source(source) => {
            session.dispatch(Msg::SourceFilterChanged(source));
            format!("source filter: {source:?}\n")
        }
        ShellCommand::Level(level) => {
            session.dispatch(Msg::LevelFilterChanged(level));
            format!("level filter: {level:?}\n")
        }
        ShellCommand::Favorite(row) => {
            let item = session.state().view().results.get(row).map(|r| r.item.clone());
            toggle_row(session, item, row)
        }
        ShellCommand::FavoriteRecommendation(row) => {
            let item = session
                .state()
                .view()
                .recommendations
                .get(row)
                .map(|r| r.item.clone());
            toggle_row(session, item, row)
        }
        ShellCommand::Recommend => {
            session.dispatch(Msg::RecommendationsRequested);
            session.settle();
            render::render_recommendations(&session.state().view())
        }
        ShellCommand::Saved => render::render_saved(&session.state().view()),
        ShellCommand::Unsave(id) => {
            session.dispatch(Msg::RemoveFavoriteClicked(id));
            String::new()
        }
        ShellCommand::Clear => {
            session.dispatch(Msg::ClearFavoritesConfirmed);
            String::new()
        }
        ShellCommand::Stats => render::render_analytics(&session.state().view().analytics),
        ShellCommand::Email(email) => {
            let before = session.state().email().map(str::to_string);
            session.dispatch(Msg::EmailChanged(email));
            match session.state().email() {
                Some(email) if before.as_deref() != Some(email) => {
                    format!("profile email: {email}\n")
                }
                _ => String::new(),
            }
        }
        ShellCommand::Help => HELP.to_string(),
        ShellCommand::Quit => String::new(),
    }
}

fn toggle_row(session: &mut Session, item: Option<scout_core::Item>, row: usize) -> String {
    match item {
        Some(item) => {
            session.dispatch(Msg::FavoriteToggleClicked(item));
            String::new()
        }
        None => format!("no row {}\n", row + 1),
    }
}
