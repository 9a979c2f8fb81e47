//! Scout core: item model, search normalization, favorites reconciliation,
//! analytics and the pure state machine driving the views.
mod analytics;
mod effect;
mod favorites;
mod item;
mod msg;
mod normalize;
mod state;
mod update;
mod view_model;

pub use analytics::{summarize, AnalyticsSnapshot, LevelCounts, SourceCounts};
pub use effect::Effect;
pub use favorites::{is_favorited, mark_favorites, toggle, FavoritesSet, ToggleOutcome};
pub use item::{Item, ItemId, Level, LevelFilter, SearchFilter, Source, SourceFilter};
pub use msg::Msg;
pub use normalize::{
    normalize, FallbackPolicy, SAMPLE_DATASET_NOVELTY, SAMPLE_PAPER_NOVELTY, SAMPLE_TAG,
};
pub use state::{
    AppState, BackendFailure, NoticeLevel, Notification, ProfileSummary, RequestId, SearchState,
};
pub use update::update;
pub use view_model::{AppViewModel, ItemRowView};
