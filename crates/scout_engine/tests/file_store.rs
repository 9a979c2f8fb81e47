use std::fs;

use scout_engine::{ensure_data_dir, FileKeyValueStore, KeyValueStore, StoreError};
use tempfile::TempDir;

#[test]
fn creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("nested").join("data");
    assert!(!new_dir.exists());
    ensure_data_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
    // Already there is fine.
    ensure_data_dir(&new_dir).unwrap();
}

#[test]
fn data_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("plain");
    fs::write(&file_path, "x").unwrap();
    assert!(matches!(
        ensure_data_dir(&file_path),
        Err(StoreError::DataDir { .. })
    ));
}

#[test]
fn first_write_creates_the_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("scout");
    let storage = FileKeyValueStore::new(dir.clone());

    assert_eq!(storage.get("favorites").unwrap(), None);
    assert!(!dir.exists());

    storage.set("favorites", "[]").unwrap();
    assert_eq!(fs::read_to_string(dir.join("favorites.json")).unwrap(), "[]");
}

#[test]
fn set_replaces_the_whole_value_and_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let storage = FileKeyValueStore::new(temp.path().to_path_buf());

    storage.set("favorites", r#"[{"id":"a"},{"id":"b"}]"#).unwrap();
    storage.set("favorites", r#"[{"id":"a"}]"#).unwrap();

    assert_eq!(
        storage.get("favorites").unwrap().as_deref(),
        Some(r#"[{"id":"a"}]"#)
    );
    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, ["favorites.json"]);
}

#[test]
fn write_into_unusable_dir_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let storage = FileKeyValueStore::new(file_path.clone());
    assert!(storage.set("favorites", "[]").is_err());
    assert!(!file_path.with_file_name("favorites.json").exists());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}
