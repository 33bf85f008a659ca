use std::collections::BTreeSet;
use std::fs;

use echoland_profile::config::StoragePaths;
use echoland_profile::profile::record::is_hex_id;
use echoland_profile::profile::{FileProfileStore, ProfileListing, ProfileRecord, ProfileStore};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileProfileStore {
    let paths = StoragePaths::new(dir.path().join("data/person/accounts")).expect("paths");
    FileProfileStore::new(paths)
}

#[test]
fn fresh_environment_has_zero_profiles() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);

    let listing = store.list();
    assert_eq!(listing, ProfileListing::Available(Vec::new()));
    assert!(dir.path().join("data/person/accounts").is_dir());

    // bootstrapping twice is fine
    assert!(store.list().names().is_empty());
}

#[test]
fn create_then_list_round_trips() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);

    let path = store
        .create(&ProfileRecord::new("Alice"))
        .expect("create should work");
    assert_eq!(path, store.paths().record_file("Alice"));
    assert_eq!(store.list().into_names(), vec!["Alice".to_string()]);

    let record = store
        .load("Alice")
        .expect("load should work")
        .expect("record should exist");
    assert_eq!(record.screen_name, "Alice");
    assert!(is_hex_id(&record.person_id));
    assert!(is_hex_id(&record.home_area_id));
    assert_ne!(record.person_id, record.home_area_id);
    assert!(record.attachments.is_empty());
}

#[test]
fn written_file_is_pretty_json_with_server_fields() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    let path = store
        .create(&ProfileRecord::new("Alice"))
        .expect("create should work");

    let raw = fs::read_to_string(path).expect("read record");
    assert!(raw.contains("\n  \"personId\""));
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["screenName"], "Alice");
    assert_eq!(value["attachments"], serde_json::json!({}));
}

#[test]
fn listing_filters_to_record_files() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    let accounts = store.paths().accounts_dir().to_path_buf();
    fs::create_dir_all(&accounts).expect("mkdir");
    fs::write(accounts.join("A.json"), "{}").expect("write A");
    fs::write(accounts.join("B.json"), "{}").expect("write B");
    fs::write(accounts.join("notes.txt"), "hello").expect("write notes");

    let names: BTreeSet<String> = store.list().into_names().into_iter().collect();
    assert_eq!(
        names,
        BTreeSet::from(["A".to_string(), "B".to_string()])
    );
}

#[test]
fn duplicate_create_leaves_file_untouched() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    let path = store
        .create(&ProfileRecord::new("Foo"))
        .expect("create should work");
    let before = fs::read(&path).expect("read before");

    assert!(store.create(&ProfileRecord::new("Foo")).is_err());
    assert_eq!(fs::read(&path).expect("read after"), before);
}

#[test]
fn names_are_case_sensitive() {
    let dir = TempDir::new().expect("tempdir");
    let store = store_in(&dir);
    store
        .create(&ProfileRecord::new("Foo"))
        .expect("create should work");

    assert!(store.exists("Foo"));
    assert!(!store.exists("foo"));
}
