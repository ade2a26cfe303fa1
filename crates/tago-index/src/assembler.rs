//! Assembles chunks into a complete tags buffer.

use crate::chunk::Chunk;

/// Form feed that opens every section of a tags file.
pub const PAGE_BREAK: u8 = 0x0c;

/// The chunks of one run, in input order.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    chunks: Vec<Chunk>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Total records across all chunks.
    pub fn tag_count(&self) -> usize {
        self.chunks.iter().map(|c| c.records().len()).sum()
    }

    /// Total declarations left out because their line could not be read.
    pub fn dropped_count(&self) -> usize {
        self.chunks.iter().map(Chunk::dropped).sum()
    }

    /// Serialize the whole index.
    pub fn assemble(&self) -> Vec<u8> {
        assemble(&self.chunks)
    }
}

/// Serialize `chunks` as `\x0c\n<file>,<len>\n<records>` sections, one per chunk.
///
/// The first chunk gets a page break too; an empty slice yields an empty buffer.
pub fn assemble(chunks: &[Chunk]) -> Vec<u8> {
    let mut out = Vec::new();
    for chunk in chunks {
        let header = chunk.header();
        out.reserve(2 + header.len() + 1 + chunk.byte_len());
        out.push(PAGE_BREAK);
        out.push(b'\n');
        out.extend_from_slice(header.as_bytes());
        out.push(b'\n');
        out.extend_from_slice(chunk.as_bytes());
    }
    out
}
