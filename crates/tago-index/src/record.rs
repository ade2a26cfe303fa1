//! Tag record formatting.

use tago_core::{Declaration, RecordLayout};

/// Separates the line text from the tag name in the etags layout.
pub const DEL: u8 = 0x7f;
/// Separates the tag name from the position in the etags layout.
pub const SOH: u8 = 0x01;

/// One tag: the declaring line, the name, and where the name sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub line_text: String,
    pub name: String,
    pub line: usize,
    pub byte_offset: usize,
}

impl TagRecord {
    /// Build the record for `decl`, whose source line reads `line_text`.
    pub fn new(decl: &Declaration, line_text: impl Into<String>) -> Self {
        Self {
            line_text: line_text.into(),
            name: decl.name.clone(),
            line: decl.line,
            byte_offset: decl.byte_offset,
        }
    }

    /// Append the serialized record, including its newline, to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>, layout: RecordLayout) {
        out.extend_from_slice(self.line_text.as_bytes());
        if layout == RecordLayout::Etags {
            out.push(DEL);
        }
        out.extend_from_slice(self.name.as_bytes());
        if layout == RecordLayout::Etags {
            out.push(SOH);
        }
        out.extend_from_slice(format!("{},{}\n", self.line, self.byte_offset).as_bytes());
    }

    pub fn to_bytes(&self, layout: RecordLayout) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_to(&mut out, layout);
        out
    }
}
