//! Scout engine: local storage, backend client and effect execution.
mod backend;
mod engine;
mod store;
mod types;
mod wire;

pub use backend::{Backend, BackendSettings, ReqwestBackend};
pub use engine::EngineHandle;
pub use store::{
    ensure_data_dir, FavoritesStore, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore,
    ProfileEmailStore, StoreError, FAVORITES_KEY, USER_EMAIL_KEY,
};
pub use types::{BackendError, EngineEvent, FailureKind, SearchRequest};
pub use wire::{ItemRecord, UserProfile};
