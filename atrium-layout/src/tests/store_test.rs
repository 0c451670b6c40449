use crate::store::{JsonPrefStore, PrefStore, StoreError, COLLAPSED_KEY};
use std::fs;
use std::path::PathBuf;

/// Unique path under the system temp directory, removed by `TempFile::drop`.
struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir()
            .join(format!("atrium-store-test-{}-{name}", std::process::id()));
        let _ = fs::remove_file(&path);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_get_on_missing_file_is_empty() {
    let tmp = TempFile::new("missing");
    let store = JsonPrefStore::new(tmp.path.clone());
    assert_eq!(store.get(COLLAPSED_KEY).unwrap(), None);
}

#[test]
fn test_set_then_get_reads_back_literal_value() {
    let tmp = TempFile::new("roundtrip");
    let mut store = JsonPrefStore::new(tmp.path.clone());

    store.set(COLLAPSED_KEY, "true").unwrap();
    assert_eq!(store.get(COLLAPSED_KEY).unwrap().as_deref(), Some("true"));

    store.set(COLLAPSED_KEY, "false").unwrap();
    assert_eq!(store.get(COLLAPSED_KEY).unwrap().as_deref(), Some("false"));
}

#[test]
fn test_set_preserves_unrelated_keys() {
    let tmp = TempFile::new("unrelated");
    let mut store = JsonPrefStore::new(tmp.path.clone());

    store.set("theme", "dark").unwrap();
    store.set(COLLAPSED_KEY, "true").unwrap();

    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(COLLAPSED_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn test_get_on_malformed_file_errors() {
    let tmp = TempFile::new("malformed-get");
    fs::write(&tmp.path, "not json").unwrap();

    let store = JsonPrefStore::new(tmp.path.clone());
    match store.get(COLLAPSED_KEY) {
        Err(StoreError::Parse(_)) => {}
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_set_rewrites_malformed_file() {
    let tmp = TempFile::new("malformed-set");
    fs::write(&tmp.path, "{ broken").unwrap();

    let mut store = JsonPrefStore::new(tmp.path.clone());
    store.set(COLLAPSED_KEY, "true").unwrap();
    assert_eq!(store.get(COLLAPSED_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn test_store_without_config_dir_errors() {
    let mut no_dir = JsonPrefStore::unavailable();
    match no_dir.set(COLLAPSED_KEY, "true") {
        Err(StoreError::NoConfigDir) => {}
        other => panic!("Expected NoConfigDir, got {other:?}"),
    }
    match no_dir.get(COLLAPSED_KEY) {
        Err(StoreError::NoConfigDir) => {}
        other => panic!("Expected NoConfigDir, got {other:?}"),
    }
}
