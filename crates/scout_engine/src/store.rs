//! Local key-value storage and the persistent favorites store.
//!
//! The favorites list lives under a single key as a JSON array and is the
//! only source of truth. Every mutation is a whole-list read-modify-write
//! done under one lock, so a second toggle always sees the first one.
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use scout_core::{toggle, FavoritesSet, Item, ToggleOutcome};
use scout_logging::{scout_debug, scout_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::wire::ItemRecord;

pub const FAVORITES_KEY: &str = "favorites";
pub const USER_EMAIL_KEY: &str = "userEmail";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data directory {path:?} is unusable: {reason}")]
    DataDir { path: PathBuf, reason: String },
    #[error("failed to read stored value: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}

/// Creates `dir` (and parents) unless it already exists as a directory.
pub fn ensure_data_dir(dir: &Path) -> Result<(), StoreError> {
    let unusable = |reason: String| StoreError::DataDir {
        path: dir.to_path_buf(),
        reason,
    };
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(unusable("not a directory".to_string())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|err| unusable(err.to_string()))
        }
        Err(err) => Err(unusable(err.to_string())),
    }
}

/// Durable string storage addressed by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// One `{key}.json` file per key inside a data directory.
///
/// The directory is created on the first write. A value is replaced by
/// writing a sibling temp file and renaming it over `{key}.json`, so a reader
/// sees the old value or the new one, never a mix.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn replace(&self, path: &Path, value: &str) -> Result<(), StoreError> {
        ensure_data_dir(&self.dir)?;
        let write_err = |source: io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        staged.write_all(value.as_bytes()).map_err(write_err)?;
        staged.as_file_mut().sync_all().map_err(write_err)?;
        staged.persist(path).map_err(|err| write_err(err.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Read(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        self.replace(&path, value)
    }
}

/// In-process storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Handle on the persisted favorites. Clones share the same write lock.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    storage: S,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Reads the stored list. Missing, unreadable or corrupt data all read as
    /// an empty set; this never fails.
    pub fn load(&self) -> FavoritesSet {
        let text = match self.storage.get(FAVORITES_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return FavoritesSet::new(),
            Err(err) => {
                scout_warn!("Failed to read favorites: {}", err);
                return FavoritesSet::new();
            }
        };

        match serde_json::from_str::<Vec<ItemRecord>>(&text) {
            Ok(records) => FavoritesSet::from_items(records.into_iter().map(Item::from)),
            Err(err) => {
                scout_warn!("Stored favorites are not valid JSON, treating as empty: {}", err);
                FavoritesSet::new()
            }
        }
    }

    /// Overwrites the stored list with `favorites`.
    pub fn save(&self, favorites: &FavoritesSet) -> Result<(), StoreError> {
        let records: Vec<ItemRecord> = favorites.items().iter().map(ItemRecord::from).collect();
        let text = serde_json::to_string(&records)?;
        self.storage.set(FAVORITES_KEY, &text)?;
        scout_debug!("Saved {} favorites", favorites.len());
        Ok(())
    }

    /// Adds or removes `item` and persists the result in one step.
    pub fn toggle(&self, item: &Item) -> Result<(FavoritesSet, ToggleOutcome), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (favorites, outcome) = toggle(item, self.load());
        self.save(&favorites)?;
        Ok((favorites, outcome))
    }

    /// Removes the item with `id` if it is still stored.
    ///
    /// Returns `None` when another view already removed it.
    pub fn remove(
        &self,
        id: &str,
    ) -> Result<(FavoritesSet, Option<ToggleOutcome>), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.load();
        let Some(item) = current.get(id).cloned() else {
            return Ok((current, None));
        };
        let (favorites, outcome) = toggle(&item, current);
        self.save(&favorites)?;
        Ok((favorites, Some(outcome)))
    }

    /// Explicit clear-all.
    pub fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.save(&FavoritesSet::new())
    }
}

/// The profile email used for recommendations.
#[derive(Debug, Clone)]
pub struct ProfileEmailStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ProfileEmailStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Option<String> {
        match self.storage.get(USER_EMAIL_KEY) {
            Ok(value) => value
                .map(|email| email.trim().to_string())
                .filter(|email| !email.is_empty()),
            Err(err) => {
                scout_warn!("Failed to read profile email: {}", err);
                None
            }
        }
    }

    pub fn save(&self, email: &str) -> Result<(), StoreError> {
        self.storage.set(USER_EMAIL_KEY, email.trim())
    }
}
