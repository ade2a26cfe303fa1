//! LanguageExtractor trait for per-language declaration extraction from tree-sitter ASTs.

use tago_core::TopLevelDecl;

/// Trait for per-language declaration extraction from tree-sitter ASTs.
///
/// Each supported language implements this to map the top level of its
/// syntax tree onto [`TopLevelDecl`] values.
pub trait LanguageExtractor: Send + Sync {
    /// Returns the file extensions this extractor handles (e.g., &["go"]).
    fn file_extensions(&self) -> &[&str];

    /// Returns the tree-sitter Language for configuring the parser.
    fn tree_sitter_language(&self) -> tree_sitter::Language;

    /// Extract the top-level declarations of a parsed file, in source order.
    ///
    /// Declarations nested inside function bodies are never returned.
    fn extract_declarations(&self, tree: &tree_sitter::Tree, source: &[u8]) -> Vec<TopLevelDecl>;
}
