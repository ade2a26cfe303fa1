use std::path::Path;

use crate::{DeclarationTree, TagoError};

// ── Traits ──────────────────────────────────────────────────────────────────

/// Turns a source file into its top-level declarations.
///
/// The tags pipeline only ever talks to this trait, so the concrete parser
/// (tree-sitter today) can be swapped without touching the rest of it.
pub trait SourceParser {
    /// Parse the file at `path`.
    ///
    /// Any syntax error is reported as [`TagoError::Parse`]; a partial tree is
    /// never returned.
    fn parse(&self, path: &Path) -> Result<DeclarationTree, TagoError>;

    /// Whether files with this extension can be parsed at all.
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Looks up the literal text of a source line.
pub trait LineSource {
    /// Return line `line` (1-based) of `path` without its trailing newline.
    fn resolve(&mut self, path: &Path, line: usize) -> Result<String, TagoError>;
}
