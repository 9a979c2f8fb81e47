use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scout_core::{RequestId, SearchFilter};
use scout_logging::{scout_debug, scout_warn};

use crate::backend::Backend;
use crate::{EngineEvent, SearchRequest};

enum EngineCommand {
    Search {
        request_id: RequestId,
        request: SearchRequest,
    },
    Recommendations {
        request_id: RequestId,
        email: String,
    },
    Profile {
        email: String,
    },
}

/// Runs backend calls on a background thread with its own tokio runtime.
///
/// Results come back as [`EngineEvent`]s in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(backend: Arc<dyn Backend>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("scout-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let backend = backend.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let event = handle_command(backend.as_ref(), command).await;
                        if event_tx.send(event).is_err() {
                            scout_debug!("Engine event dropped; receiver is gone");
                        }
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, request_id: RequestId, query: impl Into<String>, filter: SearchFilter) {
        self.send(EngineCommand::Search {
            request_id,
            request: SearchRequest {
                query: query.into(),
                filter,
            },
        });
    }

    pub fn recommendations(&self, request_id: RequestId, email: impl Into<String>) {
        self.send(EngineCommand::Recommendations {
            request_id,
            email: email.into(),
        });
    }

    pub fn profile(&self, email: impl Into<String>) {
        self.send(EngineCommand::Profile {
            email: email.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            scout_warn!("Engine thread is gone; command dropped");
        }
    }
}

async fn handle_command(backend: &dyn Backend, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Search {
            request_id,
            request,
        } => EngineEvent::SearchCompleted {
            request_id,
            result: backend.search(&request).await,
        },
        EngineCommand::Recommendations { request_id, email } => {
            EngineEvent::RecommendationsLoaded {
                request_id,
                result: backend.recommendations(&email).await,
            }
        }
        EngineCommand::Profile { email } => {
            let result = backend.profile(&email).await;
            EngineEvent::ProfileLoaded { email, result }
        }
    }
}
