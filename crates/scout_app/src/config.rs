use std::path::PathBuf;
use std::time::Duration;

use scout_core::FallbackPolicy;
use scout_engine::BackendSettings;

use crate::cli::Cli;

/// Everything the front end needs to start a session.
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub backend: BackendSettings,
    pub data_dir: PathBuf,
    pub fallback: FallbackPolicy,
    pub verbose: bool,
}

impl ScoutConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            backend: BackendSettings {
                base_url: cli.backend_url.clone(),
                request_timeout: Duration::from_secs(cli.timeout_secs.max(1)),
                ..BackendSettings::default()
            },
            data_dir: cli.data_dir.clone(),
            fallback: FallbackPolicy::from_enabled(cli.sample_fallback),
            verbose: cli.verbose,
        }
    }

    /// How long the front end waits for a backend answer before giving up on it.
    pub fn response_wait(&self) -> Duration {
        self.backend.request_timeout + self.backend.connect_timeout
    }
}
