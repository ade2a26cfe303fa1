//! Integration tests for tago-storage: real tags buffers under each write policy.

use std::fs;
use std::path::{Path, PathBuf};
use tago_core::{IndexConfig, TagoError, WritePolicy};
use tago_index::{read_sections, TagIndexer};
use tago_storage::persist;
use tempfile::TempDir;

fn tags_for(dir: &Path, name: &str, source: &str) -> (PathBuf, Vec<u8>) {
    let path = dir.join(name);
    fs::write(&path, source).unwrap();
    let buffer = TagIndexer::new(IndexConfig::default())
        .index_files(std::slice::from_ref(&path))
        .unwrap()
        .assemble();
    (path, buffer)
}

#[test]
fn second_create_only_run_leaves_first_file_intact() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let dest = out.path().join("TAGS");
    let (_, buffer) = tags_for(src.path(), "a.go", "package a\n\nfunc A() {}\n");

    persist(&buffer, &dest, WritePolicy::CreateOnly).unwrap();
    let before = fs::read(&dest).unwrap();

    let err = persist(&buffer, &dest, WritePolicy::CreateOnly).unwrap_err();
    assert!(matches!(err, TagoError::DestinationExists(_)));
    assert_eq!(fs::read(&dest).unwrap(), before);
}

#[test]
fn append_keeps_both_chunks_in_order() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let dest = out.path().join("TAGS");
    let (a, first) = tags_for(src.path(), "a.go", "package p\n\nfunc A() {}\n");
    let (b, second) = tags_for(src.path(), "b.go", "package p\n\ntype B struct{}\nvar C int\n");

    persist(&first, &dest, WritePolicy::CreateOnly).unwrap();
    let report = persist(&second, &dest, WritePolicy::Append).unwrap();
    assert!(!report.created);

    let data = fs::read(&dest).unwrap();
    assert!(data.starts_with(&first));
    let sections = read_sections(&data).unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].file_name, a.to_string_lossy());
    assert_eq!(sections[1].file_name, b.to_string_lossy());
    assert_eq!(sections[0].records().count(), 1);
    assert_eq!(sections[1].records().count(), 2);
}

#[test]
fn overwrite_discards_previous_index() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let dest = out.path().join("TAGS");
    let (_, first) = tags_for(src.path(), "a.go", "package p\n\nfunc A() {}\nfunc AA() {}\n");
    let (b, second) = tags_for(src.path(), "b.go", "package p\n\nfunc B() {}\n");

    persist(&first, &dest, WritePolicy::CreateOnly).unwrap();
    persist(&second, &dest, WritePolicy::Overwrite).unwrap();

    let data = fs::read(&dest).unwrap();
    assert_eq!(data, second);
    let sections = read_sections(&data).unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].file_name, b.to_string_lossy());
}
