//! Go language extractor using tree-sitter-go.

use crate::extractor::LanguageExtractor;
use tago_core::{Ident, TopLevelDecl};
use tree_sitter::{Node, Tree};

/// Go language extractor for tags generation.
pub struct GoExtractor;

impl GoExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for GoExtractor {
    fn file_extensions(&self) -> &[&str] {
        &["go"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
    }

    fn extract_declarations(&self, tree: &Tree, source: &[u8]) -> Vec<TopLevelDecl> {
        let root = tree.root_node();
        let mut decls = Vec::new();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            extract_top_level(node, source, &mut decls);
        }
        decls
    }
}

// ── Declaration Extraction ────────────────────────────────────────────────

fn extract_top_level(node: Node, source: &[u8], decls: &mut Vec<TopLevelDecl>) {
    match node.kind() {
        // Methods are function declarations with a receiver.
        "function_declaration" | "method_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                decls.push(TopLevelDecl::Function(ident(name_node, source)));
            }
        }
        "type_declaration" => {
            extract_type_declaration(node, source, decls);
        }
        "const_declaration" | "var_declaration" => {
            extract_value_declaration(node, source, decls);
        }
        kind => decls.push(TopLevelDecl::Other(kind.to_string())),
    }
}

fn extract_type_declaration(node: Node, source: &[u8], decls: &mut Vec<TopLevelDecl>) {
    // `type ( A int; B string )` holds several specs under one declaration
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if matches!(child.kind(), "type_spec" | "type_alias") {
            if let Some(name_node) = child.child_by_field_name("name") {
                decls.push(TopLevelDecl::Type(ident(name_node, source)));
            }
        }
    }
}

fn extract_value_declaration(node: Node, source: &[u8], decls: &mut Vec<TopLevelDecl>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "const_spec" | "var_spec" => {
                let names = spec_names(child, source);
                if !names.is_empty() {
                    decls.push(TopLevelDecl::Value(names));
                }
            }
            // Newer grammars wrap parenthesized var groups in a list node
            "var_spec_list" => extract_value_declaration(child, source, decls),
            _ => {}
        }
    }
}

fn spec_names(spec: Node, source: &[u8]) -> Vec<Ident> {
    let mut cursor = spec.walk();
    let names: Vec<Ident> = spec
        .children_by_field_name("name", &mut cursor)
        .map(|name_node| ident(name_node, source))
        .collect();
    names
}

// ── Helper Functions ──────────────────────────────────────────────────────

fn ident(node: Node, source: &[u8]) -> Ident {
    Ident {
        name: node_text(node, source),
        line: node.start_position().row + 1,
        byte_offset: node.start_byte(),
    }
}

fn node_text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or("").to_string()
}
