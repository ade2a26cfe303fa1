//! tago-storage: Writes assembled tags buffers to disk.
//!
//! A single call opens the destination once, according to the requested
//! [`WritePolicy`], and writes the whole buffer. Nothing is rolled back if a
//! write fails part way.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tago_core::{TagoError, WritePolicy};

/// What a successful [`persist`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistReport {
    pub path: PathBuf,
    pub policy: WritePolicy,
    pub bytes_written: usize,
    /// False when an existing file was appended to or overwritten.
    pub created: bool,
}

/// Write `buffer` to `destination` under `policy`.
///
/// - [`WritePolicy::CreateOnly`] fails with [`TagoError::DestinationExists`]
///   if anything is already at `destination`.
/// - [`WritePolicy::Append`] adds to the end, creating the file if needed.
/// - [`WritePolicy::Overwrite`] truncates or creates.
///
/// The parent directory must already exist.
pub fn persist(
    buffer: &[u8],
    destination: &Path,
    policy: WritePolicy,
) -> Result<PersistReport, TagoError> {
    let existed = destination.exists();
    let mut file = open(destination, policy)?;
    file.write_all(buffer)?;
    file.flush()?;

    tracing::info!(
        "Wrote {} bytes to {} ({})",
        buffer.len(),
        destination.display(),
        policy
    );

    Ok(PersistReport {
        path: destination.to_path_buf(),
        policy,
        bytes_written: buffer.len(),
        created: !existed,
    })
}

fn open(destination: &Path, policy: WritePolicy) -> Result<File, TagoError> {
    let mut options = OpenOptions::new();
    match policy {
        WritePolicy::CreateOnly => options.write(true).create_new(true),
        WritePolicy::Append => options.append(true).create(true),
        WritePolicy::Overwrite => options.write(true).create(true).truncate(true),
    };
    options.open(destination).map_err(|err| {
        if policy == WritePolicy::CreateOnly && err.kind() == ErrorKind::AlreadyExists {
            TagoError::DestinationExists(destination.to_path_buf())
        } else {
            TagoError::Io(err)
        }
    })
}
