//! Reads the literal text of declaration lines back from source files.
//!
//! [`ScanningLineResolver`] re-reads the file from the start on every lookup.
//! [`CachedLineResolver`] loads a file once and serves every lookup for it from
//! memory; the two always return the same text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tago_core::{LineSource, TagoError};

/// Looks up a line by scanning the file from its first byte each time.
#[derive(Debug, Default)]
pub struct ScanningLineResolver;

impl ScanningLineResolver {
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for ScanningLineResolver {
    fn resolve(&mut self, path: &Path, line: usize) -> Result<String, TagoError> {
        if line == 0 {
            return Err(line_error(path, line, "line numbers start at 1"));
        }
        let file = File::open(path).map_err(|e| line_error(path, line, e.to_string()))?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();

        for current in 1..=line {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| line_error(path, line, e.to_string()))?;
            if read == 0 {
                return Err(line_error(
                    path,
                    line,
                    format!("file has only {} lines", current - 1),
                ));
            }
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        decode(buf).map_err(|reason| line_error(path, line, reason))
    }
}

/// Keeps the lines of the most recently used file in memory.
#[derive(Debug, Default)]
pub struct CachedLineResolver {
    current: Option<PathBuf>,
    lines: Vec<Vec<u8>>,
}

impl CachedLineResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached file contents.
    pub fn clear(&mut self) {
        self.current = None;
        self.lines.clear();
    }

    fn load(&mut self, path: &Path) -> std::io::Result<()> {
        self.clear();
        let content = std::fs::read(path)?;
        let mut lines: Vec<Vec<u8>> = content
            .split(|b| *b == b'\n')
            .map(<[u8]>::to_vec)
            .collect();
        // `split` yields an empty tail after a final newline (or for an empty file)
        if content.is_empty() || content.last() == Some(&b'\n') {
            lines.pop();
        }
        self.lines = lines;
        self.current = Some(path.to_path_buf());
        tracing::trace!("Cached {} lines of {}", self.lines.len(), path.display());
        Ok(())
    }
}

impl LineSource for CachedLineResolver {
    fn resolve(&mut self, path: &Path, line: usize) -> Result<String, TagoError> {
        if line == 0 {
            return Err(line_error(path, line, "line numbers start at 1"));
        }
        if self.current.as_deref() != Some(path) {
            self.load(path)
                .map_err(|e| line_error(path, line, e.to_string()))?;
        }
        let bytes = self.lines.get(line - 1).cloned().ok_or_else(|| {
            line_error(
                path,
                line,
                format!("file has only {} lines", self.lines.len()),
            )
        })?;
        decode(bytes).map_err(|reason| line_error(path, line, reason))
    }
}

/// Line text is written out verbatim, so undecodable bytes are an error
/// rather than a lossy replacement.
fn decode(bytes: Vec<u8>) -> Result<String, String> {
    String::from_utf8(bytes)
        .map_err(|err| format!("line is not valid UTF-8: {}", err.utf8_error()))
}

fn line_error(path: &Path, line: usize, reason: impl Into<String>) -> TagoError {
    TagoError::LineResolution {
        path: path.display().to_string(),
        line,
        reason: reason.into(),
    }
}
