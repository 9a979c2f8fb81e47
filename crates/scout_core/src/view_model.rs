use crate::{AnalyticsSnapshot, Item, Notification, ProfileSummary, SearchFilter};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub filter: SearchFilter,
    pub searching: bool,
    pub results: Vec<ItemRowView>,
    pub recommendations: Vec<ItemRowView>,
    pub recommendations_loading: bool,
    pub profile: Option<ProfileSummary>,
    pub saved: Vec<Item>,
    pub analytics: AnalyticsSnapshot,
    pub email: Option<String>,
    pub fallback_enabled: bool,
    pub notification: Option<Notification>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRowView {
    pub item: Item,
    pub favorited: bool,
}
