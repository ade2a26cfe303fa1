//! tago-index: Tree-sitter based TAGS index generation.
//!
//! Turns Go source files into an Emacs-style tags buffer: one section per
//! file, each with a `file,length` header followed by one record per
//! top-level function, type, variable and constant.
//!
//! # Architecture
//!
//! - **parser**: Tree-sitter parsing coordinator that dispatches to language extractors
//! - **extractor**: Trait for per-language declaration extraction
//! - **languages**: Language-specific extractors (currently: Go)
//! - **filter**: Picks the identifiers that become tags
//! - **resolver**: Reads declaration lines back from source files
//! - **record**: Tag record formatting
//! - **chunk**: Per-file record sections with exact byte lengths
//! - **assembler**: Joins chunks into the final tags buffer
//! - **reader**: Splits a tags buffer back into sections
//! - **indexer**: Main pipeline: input expansion, parsing, chunk building

pub mod assembler;
pub mod chunk;
pub mod extractor;
pub mod filter;
pub mod indexer;
pub mod languages;
pub mod parser;
pub mod reader;
pub mod record;
pub mod resolver;

pub use assembler::{assemble, TagIndex, PAGE_BREAK};
pub use chunk::{Chunk, ChunkBuilder};
pub use extractor::LanguageExtractor;
pub use filter::filter_declarations;
pub use indexer::TagIndexer;
pub use parser::CodeParser;
pub use reader::{read_sections, Section};
pub use record::TagRecord;
pub use resolver::{CachedLineResolver, ScanningLineResolver};
