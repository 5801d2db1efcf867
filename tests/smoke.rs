//! Integration smoke tests for `college_compass`

use college_compass::core::loader::load_snapshot;
use college_compass::get_version;
use std::path::Path;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn sample_snapshot_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/colleges.json");
    let snapshot = load_snapshot(&path).expect("sample snapshot should parse");

    assert_eq!(snapshot.colleges.len(), 5);
    assert_eq!(snapshot.exams.len(), 3);
    assert_eq!(snapshot.blogs.len(), 2);
}

#[test]
fn missing_snapshot_is_an_error() {
    assert!(load_snapshot("/definitely/not/here.json").is_err());
}
