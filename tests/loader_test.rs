//! Tests for loading item files

use std::path::PathBuf;

use tempfile::TempDir;

use treestore::application::{load_items, load_store, ApplicationError, InputSource};
use treestore::domain::{DomainError, Record, TreeBuilder};

fn write_items(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("items.json");
    std::fs::write(&path, content).expect("write items file");
    path
}

#[test]
fn given_items_file_when_loading_store_then_queries_work() {
    let temp = TempDir::new().unwrap();
    let path = write_items(
        &temp,
        r#"[
            {"id": 1, "parent": "root"},
            {"id": 2, "parent": 1, "type": "test"},
            {"id": 3, "parent": 2, "type": null}
        ]"#,
    );

    let store = load_store(&InputSource::File(path), &TreeBuilder::new()).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(
        store.get_all_parents(3).unwrap(),
        vec![Record::node(2, 1, Some("test")), Record::root(1)]
    );
}

#[test]
fn given_missing_file_when_loading_then_operation_failed_with_path() {
    let err = load_items(&InputSource::File(PathBuf::from("/nonexistent/items.json"))).unwrap_err();
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("/nonexistent/items.json"));
}

#[test]
fn given_non_array_json_when_loading_then_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write_items(&temp, r#"{"id": 1, "parent": "root"}"#);
    let err = load_items(&InputSource::File(path)).unwrap_err();
    assert!(matches!(err, ApplicationError::Parse { .. }));
}

#[test]
fn given_empty_array_when_loading_store_then_domain_empty_input() {
    let temp = TempDir::new().unwrap();
    let path = write_items(&temp, "[]");
    let err = load_store(&InputSource::File(path), &TreeBuilder::new()).unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::EmptyInput)
    ));
}

#[test]
fn given_demo_items_when_loading_then_matches_sample() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/items.json");
    let store = load_store(&InputSource::File(path), &TreeBuilder::new()).unwrap();
    assert_eq!(store.len(), 8);
    let parents: Vec<i64> = store
        .get_all_parents(7)
        .unwrap()
        .iter()
        .map(Record::id)
        .collect();
    assert_eq!(parents, vec![4, 2, 1]);
}
