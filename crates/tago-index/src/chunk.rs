//! Per-file chunks of tag records.

use crate::record::TagRecord;
use tago_core::{Declaration, IndexConfig, LineErrorPolicy, LineSource, RecordLayout, TagoError};

/// All tag records for one source file, already serialized.
#[derive(Debug, Clone)]
pub struct Chunk {
    source_file_name: String,
    records: Vec<TagRecord>,
    bytes: Vec<u8>,
    dropped: usize,
}

impl Chunk {
    /// The source file name written in the chunk header.
    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    pub fn records(&self) -> &[TagRecord] {
        &self.records
    }

    /// Serialized record section.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Exact length of the serialized record section.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Declarations whose line could not be read back and were left out.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// `<file name>,<byte length>`
    pub fn header(&self) -> String {
        format!("{},{}", self.source_file_name, self.byte_len())
    }
}

/// Builds [`Chunk`]s from a file's declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkBuilder {
    layout: RecordLayout,
    line_errors: LineErrorPolicy,
}

impl ChunkBuilder {
    pub fn new(config: IndexConfig) -> Self {
        Self {
            layout: config.layout,
            line_errors: config.line_errors,
        }
    }

    /// Resolve, format and serialize every declaration, in order.
    ///
    /// A declaration whose line can't be read is skipped under
    /// [`LineErrorPolicy::Skip`] and fails the chunk under
    /// [`LineErrorPolicy::Abort`].
    pub fn build(
        &self,
        file_name: &str,
        decls: &[Declaration],
        resolver: &mut dyn LineSource,
    ) -> Result<Chunk, TagoError> {
        let mut records = Vec::with_capacity(decls.len());
        let mut bytes = Vec::new();
        let mut dropped = 0usize;

        for decl in decls {
            let line_text = match resolver.resolve(&decl.file, decl.line) {
                Ok(text) => text,
                Err(err) => match self.line_errors {
                    LineErrorPolicy::Abort => return Err(err),
                    LineErrorPolicy::Skip => {
                        tracing::warn!("Skipping tag {}: {}", decl.name, err);
                        dropped += 1;
                        continue;
                    }
                },
            };
            let record = TagRecord::new(decl, line_text);
            record.write_to(&mut bytes, self.layout);
            records.push(record);
        }

        Ok(Chunk {
            source_file_name: file_name.to_string(),
            records,
            bytes,
            dropped,
        })
    }
}
