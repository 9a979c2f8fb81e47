use std::path::Path;

use scout_engine::{
    ensure_data_dir, FavoritesStore, FileKeyValueStore, ProfileEmailStore, StoreError,
};
use scout_logging::scout_info;

/// Handles on everything the front end keeps on disk.
///
/// Views never read the files directly; they go through these handles.
#[derive(Debug, Clone)]
pub struct LocalStores {
    pub favorites: FavoritesStore<FileKeyValueStore>,
    pub email: ProfileEmailStore<FileKeyValueStore>,
}

impl LocalStores {
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        ensure_data_dir(data_dir)?;
        let storage = FileKeyValueStore::new(data_dir.to_path_buf());
        scout_info!("Using local data directory {:?}", data_dir);
        Ok(Self {
            favorites: FavoritesStore::new(storage.clone()),
            email: ProfileEmailStore::new(storage),
        })
    }
}
