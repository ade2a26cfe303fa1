//! Language registry for tags generation.
//!
//! Each language implements the `LanguageExtractor` trait and is registered here.

pub mod go;

use crate::extractor::LanguageExtractor;

/// Returns all available language extractors.
pub fn all_extractors() -> Vec<Box<dyn LanguageExtractor>> {
    vec![Box::new(go::GoExtractor::new())]
}
