use crate::{Item, ItemId, RequestId, SearchFilter};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Query the backend search endpoint.
    Search {
        request_id: RequestId,
        query: String,
        filter: SearchFilter,
    },
    /// Fetch the stored profile used to explain recommendations.
    LoadProfile { email: String },
    /// Query the backend recommendations endpoint.
    LoadRecommendations { request_id: RequestId, email: String },
    /// Read-modify-write of the persisted favorites.
    ToggleFavorite { item: Item },
    /// Remove by id from the persisted favorites, if still present.
    RemoveFavorite { id: ItemId },
    /// Overwrite the persisted favorites with an empty list.
    ClearFavorites,
    /// Persist the profile email.
    SaveEmail { email: String },
}
