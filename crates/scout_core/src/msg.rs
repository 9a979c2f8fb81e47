use crate::{
    BackendFailure, FavoritesSet, Item, ItemId, LevelFilter, ProfileSummary, RequestId,
    SourceFilter, ToggleOutcome,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search box.
    QueryChanged(String),
    SourceFilterChanged(SourceFilter),
    LevelFilterChanged(LevelFilter),
    /// User pressed search.
    SearchSubmitted,
    /// Backend answered a search.
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<Item>, BackendFailure>,
    },
    /// Stored profile email read at startup.
    EmailLoaded(Option<String>),
    /// User entered a profile email.
    EmailChanged(String),
    /// User opened the recommendations view.
    RecommendationsRequested,
    /// Backend answered the profile lookup made for `email`.
    ProfileLoaded {
        email: String,
        result: Result<ProfileSummary, BackendFailure>,
    },
    RecommendationsLoaded {
        request_id: RequestId,
        result: Result<Vec<Item>, BackendFailure>,
    },
    /// Favorites as currently persisted.
    FavoritesLoaded(FavoritesSet),
    /// User clicked the heart on a result row.
    FavoriteToggleClicked(Item),
    /// User clicked remove in the saved view.
    RemoveFavoriteClicked(ItemId),
    /// The store applied a toggle; `favorites` is the persisted result.
    FavoriteToggled {
        outcome: ToggleOutcome,
        favorites: FavoritesSet,
    },
    /// User confirmed clear-all.
    ClearFavoritesConfirmed,
    FavoritesCleared,
    /// The front end stopped waiting for outstanding backend answers.
    ResponseTimedOut,
    /// A store write failed; the message is shown as-is.
    StoreFailed(String),
    /// Render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
