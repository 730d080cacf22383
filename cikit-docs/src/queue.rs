//! The descriptor queue on disk.
//!
//! ```text
//! <input_dir>/
//!   <name1>.json        pending descriptors
//!   <name2>.json
//!   processed/          created on first successful archive
//!     <name0>.json      already-applied descriptors
//! ```

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ApplyError, UpdateError};

/// Name of the archive subdirectory under the input directory.
pub const ARCHIVE_DIR: &str = "processed";

/// A descriptor file waiting in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDescriptor {
    pub file_name: OsString,
    pub path: PathBuf,
}

impl PendingDescriptor {
    /// File name for display; lossy for non-UTF-8 names.
    pub fn name(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }
}

/// List pending descriptors in byte-wise ascending file-name order.
///
/// Returns `Ok(None)` when `input_dir` does not exist. Only regular files
/// (symlinks are followed) whose name ends with `suffix` are returned;
/// subdirectories, including [`ARCHIVE_DIR`], are skipped.
pub fn discover(input_dir: &Path, suffix: &str) -> Result<Option<Vec<PendingDescriptor>>, ApplyError> {
    let meta = match std::fs::metadata(input_dir) {
        Ok(meta) => meta,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ApplyError::InputUnreadable {
                path: input_dir.to_path_buf(),
                source,
            })
        }
    };
    if !meta.is_dir() {
        return Err(ApplyError::InputNotDirectory {
            path: input_dir.to_path_buf(),
        });
    }

    let unreadable = |source| ApplyError::InputUnreadable {
        path: input_dir.to_path_buf(),
        source,
    };
    let mut pending = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let file_name = entry.file_name();
        let lossy = file_name.to_string_lossy();
        if lossy.len() <= suffix.len() || !lossy.ends_with(suffix) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        pending.push(PendingDescriptor { file_name, path });
    }
    pending.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(Some(pending))
}

/// Move an applied descriptor into `<input_dir>/processed/`, keeping its name.
///
/// Refuses to overwrite an existing archive entry.
pub fn archive(input_dir: &Path, pending: &PendingDescriptor) -> Result<PathBuf, UpdateError> {
    let dir = input_dir.join(ARCHIVE_DIR);
    match std::fs::create_dir(&dir) {
        Ok(()) => tracing::debug!("created archive {}", dir.display()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
        Err(source) => return Err(UpdateError::ArchiveFailed { path: dir, source }),
    }

    let dest = dir.join(&pending.file_name);
    if std::fs::symlink_metadata(&dest).is_ok() {
        return Err(UpdateError::ArchiveConflict { path: dest });
    }
    std::fs::rename(&pending.path, &dest).map_err(|source| UpdateError::ArchiveFailed {
        path: dest.clone(),
        source,
    })?;
    Ok(dest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
