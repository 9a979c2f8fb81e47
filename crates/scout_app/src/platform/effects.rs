use std::time::Duration;

use scout_core::{BackendFailure, Effect, Msg, ProfileSummary};
use scout_engine::{BackendError, EngineEvent, EngineHandle};
use scout_logging::{scout_error, scout_info, scout_warn};

use super::persistence::LocalStores;

const FAVORITES_WRITE_FAILED: &str = "Could not save favorites";
const EMAIL_WRITE_FAILED: &str = "Could not save profile email";

/// Executes effects: store mutations run inline and answer immediately,
/// backend calls go to the engine and answer later through [`EffectRunner::next_event`].
pub struct EffectRunner {
    engine: EngineHandle,
    stores: LocalStores,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, stores: LocalStores) -> Self {
        Self { engine, stores }
    }

    /// Messages that seed a fresh session from disk.
    pub fn initial_messages(&self) -> Vec<Msg> {
        vec![
            Msg::FavoritesLoaded(self.stores.favorites.load()),
            Msg::EmailLoaded(self.stores.email.load()),
        ]
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut replies = Vec::new();
        for effect in effects {
            match effect {
                Effect::Search {
                    request_id,
                    query,
                    filter,
                } => {
                    scout_info!(
                        "Search request_id={} query={:?} source={:?} level={:?}",
                        request_id,
                        query,
                        filter.source,
                        filter.level
                    );
                    self.engine.search(request_id, query, filter);
                }
                Effect::LoadProfile { email } => self.engine.profile(email),
                Effect::LoadRecommendations { request_id, email } => {
                    scout_info!("Recommendations request_id={}", request_id);
                    self.engine.recommendations(request_id, email);
                }
                Effect::ToggleFavorite { item } => {
                    let reply = match self.stores.favorites.toggle(&item) {
                        Ok((favorites, outcome)) => {
                            scout_info!("Favorite {} {:?}", item.id, outcome);
                            Msg::FavoriteToggled { outcome, favorites }
                        }
                        Err(err) => {
                            scout_error!("Failed to toggle favorite {}: {}", item.id, err);
                            Msg::StoreFailed(FAVORITES_WRITE_FAILED.to_string())
                        }
                    };
                    replies.push(reply);
                }
                Effect::RemoveFavorite { id } => {
                    let reply = match self.stores.favorites.remove(&id) {
                        Ok((favorites, Some(outcome))) => {
                            scout_info!("Favorite {} {:?}", id, outcome);
                            Msg::FavoriteToggled { outcome, favorites }
                        }
                        Ok((favorites, None)) => Msg::FavoritesLoaded(favorites),
                        Err(err) => {
                            scout_error!("Failed to remove favorite {}: {}", id, err);
                            Msg::StoreFailed(FAVORITES_WRITE_FAILED.to_string())
                        }
                    };
                    replies.push(reply);
                }
                Effect::ClearFavorites => {
                    let reply = match self.stores.favorites.clear() {
                        Ok(()) => Msg::FavoritesCleared,
                        Err(err) => {
                            scout_error!("Failed to clear favorites: {}", err);
                            Msg::StoreFailed(FAVORITES_WRITE_FAILED.to_string())
                        }
                    };
                    replies.push(reply);
                }
                Effect::SaveEmail { email } => {
                    if let Err(err) = self.stores.email.save(&email) {
                        scout_error!("Failed to save profile email: {}", err);
                        replies.push(Msg::StoreFailed(EMAIL_WRITE_FAILED.to_string()));
                    }
                }
            }
        }
        replies
    }

    /// Waits up to `timeout` for the next backend answer.
    pub fn next_event(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }

    /// Returns a backend answer that has already arrived, if any.
    pub fn poll_event(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
            request_id,
            result: result.map_err(|err| map_failure("search", err)),
        },
        EngineEvent::RecommendationsLoaded { request_id, result } => Msg::RecommendationsLoaded {
            request_id,
            result: result.map_err(|err| map_failure("recommendations", err)),
        },
        EngineEvent::ProfileLoaded { email, result } => {
            let result = result
                .map(ProfileSummary::from)
                .map_err(|err| map_failure(&format!("profile {email}"), err));
            Msg::ProfileLoaded { email, result }
        }
    }
}

fn map_failure(what: &str, err: BackendError) -> BackendFailure {
    scout_warn!("Backend {} failed: {}", what, err);
    BackendFailure::from(err)
}
