//! Integration tests for tago-index: Go sources in, tags buffer out.

use std::fs;
use std::path::PathBuf;
use tago_core::{IndexConfig, LineErrorPolicy, RecordLayout};
use tago_index::{read_sections, TagIndexer};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).unwrap();
    path
}

// ── Ordering ───────────────────────────────────────────────────────────────

#[test]
fn records_follow_declaration_order() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "order.go",
        "package order\n\nfunc A(){}\ntype B struct{}\nvar C, D int\n",
    );

    let index = TagIndexer::new(IndexConfig::default())
        .index_files(&[path])
        .unwrap();
    let names: Vec<_> = index.chunks()[0]
        .records()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn multi_name_values_share_line_with_own_offsets() {
    let dir = TempDir::new().unwrap();
    let source = "package names\n\nvar X, Y string\n";
    let path = write(&dir, "names.go", source);

    let index = TagIndexer::new(IndexConfig::default())
        .index_files(&[path])
        .unwrap();
    let records = index.chunks()[0].records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].line, 3);
    assert_eq!(records[1].line, 3);
    assert_eq!(records[0].line_text, "var X, Y string");
    assert_eq!(&source[records[0].byte_offset..][..1], "X");
    assert_eq!(&source[records[1].byte_offset..][..1], "Y");
}

// ── Framing ────────────────────────────────────────────────────────────────

#[test]
fn headers_announce_exact_section_lengths() {
    let dir = TempDir::new().unwrap();
    let a = write(
        &dir,
        "a.go",
        r#"package a

import "fmt"

// Greeter says hello.
type Greeter struct{ name string }

func (g *Greeter) Greet() { fmt.Println("hi", g.name) }

const (
	Max = 10
	Min = 1
)
"#,
    );
    let b = write(&dir, "b.go", "package a\n\nvar ünïcode = \"ß\"\n");

    let index = TagIndexer::new(IndexConfig::default())
        .index_files(&[a.clone(), b.clone()])
        .unwrap();
    let buffer = index.assemble();
    let sections = read_sections(&buffer).unwrap();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].file_name, a.to_string_lossy());
    assert_eq!(sections[1].file_name, b.to_string_lossy());
    for (section, chunk) in sections.iter().zip(index.chunks()) {
        assert_eq!(section.body, chunk.as_bytes());
        assert_eq!(section.records().count(), chunk.records().len());
    }

    let first: Vec<_> = sections[0].records().collect();
    assert_eq!(
        first,
        vec![
            &b"type Greeter struct{ name string }Greeter6,53"[..],
            &b"func (g *Greeter) Greet() { fmt.Println(\"hi\", g.name) }Greet8,102"[..],
            &b"\tMax = 10Max11,150"[..],
            &b"\tMin = 1Min12,160"[..],
        ]
    );
}

#[test]
fn etags_layout_round_trips_through_reader() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "e.go", "package e\n\nfunc E() {}\n");
    let config = IndexConfig {
        line_errors: LineErrorPolicy::Skip,
        layout: RecordLayout::Etags,
    };

    let buffer = TagIndexer::new(config)
        .index_files(&[path])
        .unwrap()
        .assemble();
    let sections = read_sections(&buffer).unwrap();
    assert_eq!(sections[0].body, b"func E() {}\x7fE\x013,16\n");
}

#[test]
fn file_without_declarations_gets_empty_section() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "doc.go", "// Package doc is empty.\npackage doc\n");

    let buffer = TagIndexer::new(IndexConfig::default())
        .index_files(std::slice::from_ref(&path))
        .unwrap()
        .assemble();
    let expected = format!("\x0c\n{},0\n", path.to_string_lossy());
    assert_eq!(buffer, expected.as_bytes());
}

#[test]
fn non_utf8_source_fails_instead_of_being_rewritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bytes.go");
    fs::write(&path, b"package bytes\n\nvar X = 1 // \xff\xfe\n").unwrap();

    let err = TagIndexer::new(IndexConfig::default())
        .index_files(&[path])
        .unwrap_err();
    assert!(err.is_parse_error(), "{err}");
}
