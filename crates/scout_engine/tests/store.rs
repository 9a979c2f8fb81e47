use std::fs;
use std::sync::Arc;

use scout_core::{Item, Level, Source, ToggleOutcome};
use scout_engine::{
    FavoritesStore, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, ProfileEmailStore,
    FAVORITES_KEY,
};
use tempfile::TempDir;

fn item(id: &str, source: Source) -> Item {
    Item {
        id: id.to_string(),
        title: format!("title {id}"),
        description: "desc".to_string(),
        source,
        level: Level::Intermediate,
        novelty_score: 7.5,
        url: format!("https://example.org/{id}"),
        tags: Some(vec!["a".to_string(), "b".to_string()]),
        stars: Some(3),
        language: None,
    }
}

#[test]
fn fresh_store_loads_empty() {
    let temp = TempDir::new().unwrap();
    let store = FavoritesStore::new(FileKeyValueStore::new(temp.path().join("never-created")));
    assert!(store.load().is_empty());

    let store = FavoritesStore::new(MemoryKeyValueStore::new());
    assert!(store.load().is_empty());
}

#[test]
fn corrupt_payload_loads_empty() {
    let storage = Arc::new(MemoryKeyValueStore::new());
    storage.set(FAVORITES_KEY, "{not json").unwrap();
    let store = FavoritesStore::new(storage.clone());
    assert!(store.load().is_empty());

    storage.set(FAVORITES_KEY, r#"{"id":"object-not-array"}"#).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn toggle_persists_immediately() {
    let temp = TempDir::new().unwrap();
    let store = FavoritesStore::new(FileKeyValueStore::new(temp.path().to_path_buf()));

    let (set, outcome) = store.toggle(&item("a", Source::Github)).unwrap();
    assert_eq!(outcome, ToggleOutcome::Added);
    assert_eq!(set.len(), 1);

    let reopened = FavoritesStore::new(FileKeyValueStore::new(temp.path().to_path_buf()));
    let loaded = reopened.load();
    assert_eq!(loaded, set);
    assert_eq!(loaded.items()[0], item("a", Source::Github));

    let (set, outcome) = reopened.toggle(&item("a", Source::Github)).unwrap();
    assert_eq!(outcome, ToggleOutcome::Removed);
    assert!(set.is_empty());
    assert!(store.load().is_empty());
}

#[test]
fn handles_never_lose_updates() {
    let storage = Arc::new(MemoryKeyValueStore::new());
    let explore = FavoritesStore::new(storage.clone());
    let recommendations = FavoritesStore::new(storage.clone());

    explore.toggle(&item("a", Source::Github)).unwrap();
    recommendations.toggle(&item("b", Source::Paper)).unwrap();
    explore.toggle(&item("c", Source::Dataset)).unwrap();

    let ids: Vec<_> = explore
        .load()
        .into_items()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn concurrent_toggles_are_serialized() {
    let storage = Arc::new(MemoryKeyValueStore::new());
    let store = FavoritesStore::new(storage);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                store
                    .toggle(&item(&format!("id-{i}"), Source::Github))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.load().len(), 8);
}

#[test]
fn remove_and_clear() {
    let store = FavoritesStore::new(MemoryKeyValueStore::new());
    store.toggle(&item("a", Source::Github)).unwrap();
    store.toggle(&item("b", Source::Paper)).unwrap();

    let (set, outcome) = store.remove("a").unwrap();
    assert_eq!(outcome, Some(ToggleOutcome::Removed));
    assert_eq!(set.len(), 1);

    // Already gone: remove must not re-add it.
    let (set, outcome) = store.remove("a").unwrap();
    assert_eq!(outcome, None);
    assert_eq!(set.len(), 1);

    store.clear().unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn stored_json_uses_wire_field_names() {
    let temp = TempDir::new().unwrap();
    let store = FavoritesStore::new(FileKeyValueStore::new(temp.path().to_path_buf()));
    store.toggle(&item("a", Source::Dataset)).unwrap();

    let text = fs::read_to_string(temp.path().join("favorites.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let first = &value[0];
    assert_eq!(first["id"], "a");
    assert_eq!(first["source"], "dataset");
    assert_eq!(first["level"], "intermediate");
    assert_eq!(first["novelty_score"], 7.5);
    assert_eq!(first["stars"], 3);
    assert!(first.get("language").is_none());
}

#[test]
fn duplicate_ids_on_disk_are_collapsed() {
    let storage = Arc::new(MemoryKeyValueStore::new());
    storage
        .set(
            FAVORITES_KEY,
            r#"[{"id":"a","title":"first"},{"id":"a","title":"second"}]"#,
        )
        .unwrap();
    let set = FavoritesStore::new(storage).load();
    assert_eq!(set.len(), 1);
    assert_eq!(set.items()[0].title, "first");
}

#[test]
fn profile_email_round_trip() {
    let temp = TempDir::new().unwrap();
    let emails = ProfileEmailStore::new(FileKeyValueStore::new(temp.path().to_path_buf()));
    assert_eq!(emails.load(), None);

    emails.save(" ada@example.com ").unwrap();
    assert_eq!(emails.load().as_deref(), Some("ada@example.com"));
    assert!(temp.path().join("userEmail.json").exists());
}

#[test]
fn invalid_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    let storage = FileKeyValueStore::new(temp.path().to_path_buf());
    assert!(storage.set("../escape", "x").is_err());
    assert!(storage.get("").is_err());
}
