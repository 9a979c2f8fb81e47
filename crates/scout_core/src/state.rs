use crate::favorites::mark_favorites;
use crate::view_model::{AppViewModel, ItemRowView};
use crate::{summarize, FallbackPolicy, FavoritesSet, Item, SearchFilter};

pub type RequestId = u64;

/// Why a backend call produced no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendFailure {
    /// The backend has no record for the request (unknown profile).
    NotFound,
    Unavailable { message: String },
}

/// The part of a user profile shown next to recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileSummary {
    pub name: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// A search the backend has not answered yet.
///
/// The query and filter are captured at submit time so later edits to the
/// search box do not change how the answer is normalized.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InFlightSearch {
    pub(crate) request_id: RequestId,
    pub(crate) query: String,
    pub(crate) filter: SearchFilter,
}

/// Ephemeral explore-view state. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub(crate) query: String,
    pub(crate) filter: SearchFilter,
    pub(crate) results: Vec<Item>,
    pub(crate) in_flight: Option<InFlightSearch>,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> SearchFilter {
        self.filter
    }

    pub fn results(&self) -> &[Item] {
        &self.results
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct RecommendationsState {
    pub(crate) items: Vec<Item>,
    pub(crate) profile: Option<ProfileSummary>,
    pub(crate) in_flight: Option<RequestId>,
    /// Email of the profile lookup still awaiting an answer.
    pub(crate) profile_pending: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) search: SearchState,
    pub(crate) recommendations: RecommendationsState,
    /// Mirror of the persisted favorites, refreshed after every store write.
    pub(crate) favorites: FavoritesSet,
    pub(crate) email: Option<String>,
    pub(crate) fallback: FallbackPolicy,
    pub(crate) next_request_id: RequestId,
    pub(crate) notification: Option<Notification>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(fallback: FallbackPolicy) -> Self {
        Self {
            fallback,
            ..Self::default()
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.search.query.clone(),
            filter: self.search.filter,
            searching: self.search.in_flight.is_some(),
            results: rows(&self.search.results, &self.favorites),
            recommendations: rows(&self.recommendations.items, &self.favorites),
            recommendations_loading: self.recommendations.in_flight.is_some(),
            profile: self.recommendations.profile.clone(),
            saved: self.favorites.items().to_vec(),
            analytics: summarize(&self.favorites),
            email: self.email.clone(),
            fallback_enabled: self.fallback.is_enabled(),
            notification: self.notification.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Takes the pending notification so it is shown once.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.dirty = true;
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }
}

fn rows(items: &[Item], favorites: &FavoritesSet) -> Vec<ItemRowView> {
    mark_favorites(items, favorites)
        .map(|(item, favorited)| ItemRowView {
            item: item.clone(),
            favorited,
        })
        .collect()
}
