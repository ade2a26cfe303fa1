//! Main tags pipeline orchestrator.
//!
//! Expands the input paths, parses each file, and turns its declarations into
//! a chunk. A single parse failure aborts the whole run.

use crate::assembler::TagIndex;
use crate::chunk::ChunkBuilder;
use crate::filter::filter_declarations;
use crate::parser::CodeParser;
use crate::resolver::CachedLineResolver;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tago_core::{IndexConfig, SourceParser, TagoError};

/// The tags pipeline.
///
/// Files are processed one at a time, in the order given.
pub struct TagIndexer<P: SourceParser = CodeParser> {
    parser: P,
    builder: ChunkBuilder,
}

impl TagIndexer<CodeParser> {
    /// Create an indexer backed by the tree-sitter parser.
    pub fn new(config: IndexConfig) -> Self {
        Self::with_parser(CodeParser::new(), config)
    }
}

impl<P: SourceParser> TagIndexer<P> {
    pub fn with_parser(parser: P, config: IndexConfig) -> Self {
        Self {
            parser,
            builder: ChunkBuilder::new(config),
        }
    }

    /// Turn the paths given on the command line into the list of files to index.
    ///
    /// Files are kept as given and in order. A directory expands to the
    /// supported source files beneath it, sorted by path, honoring `.gitignore`.
    pub fn expand_inputs(&self, inputs: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for input in inputs {
            if input.is_dir() {
                self.walk_directory(input, &mut files);
            } else {
                files.push(input.clone());
            }
        }
        files
    }

    fn walk_directory(&self, root: &Path, files: &mut Vec<PathBuf>) {
        let walker = WalkBuilder::new(root)
            .hidden(true) // skip hidden files/dirs
            .git_ignore(true) // respect .gitignore
            .git_exclude(true) // respect .git/info/exclude
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!("Walk error: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let supported = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| self.parser.supports_extension(ext));
            if supported {
                files.push(path.to_path_buf());
            }
        }
    }

    /// Parse every file and build one chunk per file, in input order.
    ///
    /// Returns the first parse error without building anything further.
    pub fn index_files(&self, files: &[PathBuf]) -> Result<TagIndex, TagoError> {
        let mut index = TagIndex::new();
        let mut resolver = CachedLineResolver::new();

        for path in files {
            let tree = self.parser.parse(path)?;
            let decls = filter_declarations(&tree);
            let chunk = self.builder.build(&tree.file_path, &decls, &mut resolver)?;
            resolver.clear();

            tracing::debug!(
                "{}: {} declarations, {} tags, {} bytes",
                tree.file_path,
                decls.len(),
                chunk.records().len(),
                chunk.byte_len()
            );
            index.push(chunk);
        }

        tracing::info!(
            "Indexed {} files: {} tags, {} dropped",
            index.chunks().len(),
            index.tag_count(),
            index.dropped_count()
        );

        Ok(index)
    }
}
