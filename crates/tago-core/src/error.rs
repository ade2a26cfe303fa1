use std::path::PathBuf;

/// Unified error type for tago.
#[derive(Debug, thiserror::Error)]
pub enum TagoError {
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Cannot resolve line {line} of {path}: {reason}")]
    LineResolution {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("Malformed tags data: {0}")]
    MalformedIndex(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TagoError {
    /// Shorthand for a [`TagoError::Parse`].
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for errors that mean the input could not be parsed at all.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
