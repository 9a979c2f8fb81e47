use crate::state::InFlightSearch;
use crate::{AppState, BackendFailure, Effect, Msg, Notification};

const EMPTY_QUERY: &str = "Please enter a search query";
const NO_SEARCH_RESULTS: &str = "No projects or papers found.";
const SEARCH_FAILED: &str = "Failed to search";
const NO_PROFILE: &str = "Please create your profile first";
const PROFILE_NOT_FOUND: &str = "Profile not found. Please create your profile first.";
const NO_RECOMMENDATIONS: &str = "No recommendations found. Try updating your profile.";
const RECOMMENDATIONS_FAILED: &str = "Failed to load recommendations";
const EMPTY_EMAIL: &str = "Please enter an email address";
const FAVORITES_CLEARED: &str = "All favorites cleared";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(query) => {
            if state.search.query != query {
                state.search.query = query;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SourceFilterChanged(source) => {
            if state.search.filter.source != source {
                state.search.filter.source = source;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::LevelFilterChanged(level) => {
            if state.search.filter.level != level {
                state.search.filter.level = level;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let query = state.search.query.trim().to_string();
            if query.is_empty() {
                state.notify(Notification::error(EMPTY_QUERY));
                return (state, Vec::new());
            }
            let request_id = state.allocate_request_id();
            let filter = state.search.filter;
            state.search.in_flight = Some(InFlightSearch {
                request_id,
                query: query.clone(),
                filter,
            });
            state.mark_dirty();
            vec![Effect::Search {
                request_id,
                query,
                filter,
            }]
        }
        Msg::SearchCompleted { request_id, result } => {
            let in_flight = match state.search.in_flight.take() {
                Some(pending) if pending.request_id == request_id => pending,
                other => {
                    // Superseded or unknown request; keep waiting for the current one.
                    state.search.in_flight = other;
                    return (state, Vec::new());
                }
            };
            match result {
                Ok(raw) => {
                    let items =
                        state
                            .fallback
                            .normalize(raw, &in_flight.filter, &in_flight.query);
                    if items.is_empty() {
                        state.notify(Notification::info(NO_SEARCH_RESULTS));
                    }
                    state.search.results = items;
                }
                Err(_) => {
                    state.search.results.clear();
                    state.notify(Notification::error(SEARCH_FAILED));
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::EmailLoaded(email) => {
            state.email = email.filter(|value| !value.trim().is_empty());
            state.mark_dirty();
            Vec::new()
        }
        Msg::EmailChanged(raw) => {
            let email = raw.trim().to_string();
            if email.is_empty() {
                state.notify(Notification::error(EMPTY_EMAIL));
                return (state, Vec::new());
            }
            if state.email.as_deref() != Some(email.as_str()) {
                state.recommendations = Default::default();
            }
            state.email = Some(email.clone());
            state.mark_dirty();
            vec![Effect::SaveEmail { email }]
        }
        Msg::RecommendationsRequested => {
            let Some(email) = state.email.clone() else {
                state.notify(Notification::error(NO_PROFILE));
                return (state, Vec::new());
            };
            let request_id = state.allocate_request_id();
            state.recommendations.in_flight = Some(request_id);
            state.recommendations.profile_pending = Some(email.clone());
            state.mark_dirty();
            vec![
                Effect::LoadProfile {
                    email: email.clone(),
                },
                Effect::LoadRecommendations { request_id, email },
            ]
        }
        Msg::ProfileLoaded { email, result } => {
            if state.recommendations.profile_pending.as_deref() != Some(email.as_str()) {
                // Answer for an email that has since been replaced or already answered.
                return (state, Vec::new());
            }
            state.recommendations.profile_pending = None;
            match result {
                Ok(profile) => state.recommendations.profile = Some(profile),
                Err(BackendFailure::NotFound) => {
                    state.recommendations.profile = None;
                    state.notify(Notification::error(PROFILE_NOT_FOUND));
                }
                // The recommendations answer carries the user-facing error.
                Err(BackendFailure::Unavailable { .. }) => {}
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::RecommendationsLoaded { request_id, result } => {
            if state.recommendations.in_flight != Some(request_id) {
                return (state, Vec::new());
            }
            state.recommendations.in_flight = None;
            match result {
                // Recommendations are shown exactly as the backend ranked them.
                Ok(items) => {
                    if items.is_empty() {
                        state.notify(Notification::info(NO_RECOMMENDATIONS));
                    }
                    state.recommendations.items = items;
                }
                Err(BackendFailure::NotFound) => {
                    state.recommendations.items.clear();
                    state.notify(Notification::error(PROFILE_NOT_FOUND));
                }
                Err(BackendFailure::Unavailable { .. }) => {
                    state.recommendations.items.clear();
                    state.notify(Notification::error(RECOMMENDATIONS_FAILED));
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::FavoritesLoaded(favorites) => {
            state.favorites = favorites;
            state.mark_dirty();
            Vec::new()
        }
        Msg::FavoriteToggleClicked(item) => vec![Effect::ToggleFavorite { item }],
        Msg::RemoveFavoriteClicked(id) => vec![Effect::RemoveFavorite { id }],
        Msg::FavoriteToggled { outcome, favorites } => {
            state.favorites = favorites;
            state.notify(Notification::success(outcome.notice()));
            Vec::new()
        }
        Msg::ClearFavoritesConfirmed => vec![Effect::ClearFavorites],
        Msg::FavoritesCleared => {
            state.favorites.clear();
            state.notify(Notification::success(FAVORITES_CLEARED));
            Vec::new()
        }
        Msg::ResponseTimedOut => {
            // Answers that still arrive later no longer match and are dropped.
            if state.search.in_flight.take().is_some() {
                state.search.results.clear();
                state.notify(Notification::error(SEARCH_FAILED));
            }
            if state.recommendations.in_flight.take().is_some() {
                state.recommendations.items.clear();
                state.recommendations.profile_pending = None;
                state.notify(Notification::error(RECOMMENDATIONS_FAILED));
            }
            Vec::new()
        }
        Msg::StoreFailed(message) => {
            state.notify(Notification::error(message));
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
