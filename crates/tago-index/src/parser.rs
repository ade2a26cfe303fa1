//! Tree-sitter parsing coordinator.
//!
//! Detects language from file extension, selects the appropriate extractor,
//! and refuses any file whose syntax tree contains errors.

use crate::extractor::LanguageExtractor;
use crate::languages;
use std::path::Path;
use tago_core::{DeclarationTree, SourceParser, TagoError};
use tree_sitter::{Node, Parser};

/// Coordinates tree-sitter parsing across the registered languages.
pub struct CodeParser {
    extractors: Vec<Box<dyn LanguageExtractor>>,
}

impl CodeParser {
    /// Create a new CodeParser with all registered language extractors.
    pub fn new() -> Self {
        Self {
            extractors: languages::all_extractors(),
        }
    }

    /// Parse in-memory source that belongs to `path`.
    ///
    /// `path` selects the language and is recorded as the tree's file path.
    pub fn parse_source(&self, path: &str, content: &[u8]) -> Result<DeclarationTree, TagoError> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let extractor = self
            .find_extractor(extension)
            .ok_or_else(|| TagoError::parse(path, "unsupported file type"))?;

        // Records copy source lines verbatim, so they must be valid text
        if let Err(err) = std::str::from_utf8(content) {
            let (line, column) = position_of(content, err.valid_up_to());
            return Err(TagoError::parse(
                path,
                format!("invalid UTF-8 at line {}, column {}", line, column),
            ));
        }

        let mut parser = Parser::new();
        parser
            .set_language(&extractor.tree_sitter_language())
            .map_err(|e| TagoError::parse(path, e.to_string()))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| TagoError::parse(path, "parser produced no syntax tree"))?;

        if let Some(bad) = first_error(tree.root_node()) {
            let pos = bad.start_position();
            let what = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                "syntax error".to_string()
            };
            return Err(TagoError::parse(
                path,
                format!("{} at line {}, column {}", what, pos.row + 1, pos.column + 1),
            ));
        }

        Ok(DeclarationTree {
            file_path: path.to_string(),
            decls: extractor.extract_declarations(&tree, content),
        })
    }

    /// Find the extractor for a given file extension.
    fn find_extractor(&self, ext: &str) -> Option<&dyn LanguageExtractor> {
        self.extractors
            .iter()
            .find(|e| e.file_extensions().contains(&ext))
            .map(|e| e.as_ref())
    }
}

impl Default for CodeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for CodeParser {
    fn parse(&self, path: &Path) -> Result<DeclarationTree, TagoError> {
        let path_str = path.to_string_lossy();
        let content =
            std::fs::read(path).map_err(|e| TagoError::parse(path_str.to_string(), e.to_string()))?;
        self.parse_source(&path_str, &content)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        self.extractors
            .iter()
            .any(|e| e.file_extensions().contains(&ext))
    }
}

/// 1-based line and column of byte `offset` in `content`.
fn position_of(content: &[u8], offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line = before.iter().filter(|b| **b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |i| i + 1);
    (line, offset - line_start + 1)
}

/// First `ERROR` or `MISSING` node in document order, if any.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
