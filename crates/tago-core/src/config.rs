//! Persistent configuration for tago.
//!
//! Loads a TOML config from `~/.tago/config.toml` or an explicit path. Every
//! field is optional; command-line flags are layered on top by the binary.

use crate::{LineErrorPolicy, RecordLayout, TagoError, WritePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional name of the tags file.
pub const DEFAULT_TAGS_NAME: &str = "TAGS";

/// Top-level tago configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagoConfig {
    pub output: OutputConfig,
    pub index: IndexConfig,
}

impl TagoConfig {
    /// Load configuration from the given path.
    pub fn load(path: &Path) -> Result<Self, TagoError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TagoError::Config(e.to_string()))
    }

    /// Load from the default path, or return defaults if the file doesn't exist
    /// or can't be read.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Default config path: `~/.tago/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tago")
            .join("config.toml")
    }
}

/// Where and how the tags file is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination directory. Falls back to the working directory when unset.
    pub dir: Option<PathBuf>,
    /// File name of the tags file inside `dir`.
    pub file_name: String,
    pub policy: WritePolicy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: DEFAULT_TAGS_NAME.to_string(),
            policy: WritePolicy::default(),
        }
    }
}

impl OutputConfig {
    /// Full path of the tags file.
    pub fn destination(&self) -> PathBuf {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => default_destination_dir(),
        };
        dir.join(&self.file_name)
    }
}

/// How tag records are produced.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub line_errors: LineErrorPolicy,
    pub layout: RecordLayout,
}

/// The working directory, or an empty (relative) path if it can't be determined.
pub fn default_destination_dir() -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!("Error getting working directory: {}", err);
            PathBuf::new()
        }
    }
}
