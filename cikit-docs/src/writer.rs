//! Atomic target writes.
//!
//! ## `atomic_write` protocol
//!
//! 1. Compare the new contents with what is on disk → skip if identical.
//! 2. Resolve an existing target through symlinks and open it for writing,
//!    so a read-only file fails here and is left alone.
//! 3. Write to `<real path>.cikit.tmp` with the target's permissions.
//! 4. Rename onto the real path (atomic on POSIX).
//!
//! Parent directories are never created: a descriptor naming a file in a
//! missing directory is an error, not an instruction to build the tree.

use std::fs::{self, OpenOptions, Permissions};
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped; the new contents match what is already on disk.
    Unchanged { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::Unchanged { path } => path,
        }
    }
}

/// Temp-file sibling used while writing `path`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".cikit.tmp");
    path.with_file_name(name)
}

/// A target as it will be written: the file the bytes land in, and the mode
/// to carry over when it already exists.
struct Resolved {
    dest: PathBuf,
    permissions: Option<Permissions>,
}

fn resolve(path: &Path) -> io::Result<Resolved> {
    match fs::metadata(path) {
        Ok(meta) => {
            let dest = fs::canonicalize(path)?;
            OpenOptions::new().write(true).open(&dest)?;
            Ok(Resolved {
                dest,
                permissions: Some(meta.permissions()),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            if !parent.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("directory {} does not exist", parent.display()),
                ));
            }
            Ok(Resolved {
                dest: path.to_path_buf(),
                permissions: None,
            })
        }
        Err(e) => Err(e),
    }
}

/// Fail exactly as [`atomic_write`] would if `path` cannot be written.
pub fn ensure_writable(path: &Path) -> io::Result<()> {
    resolve(path).map(|_| ())
}

/// Atomically replace the contents of `path` with `content`.
///
/// `existing` is the current on-disk text (if any), used to skip no-op writes.
/// An existing target keeps its permissions, and a symlinked target is
/// updated through the link.
pub fn atomic_write(path: &Path, content: &str, existing: Option<&str>) -> io::Result<WriteResult> {
    if existing == Some(content) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    let resolved = resolve(path)?;
    write_via_tmp(&resolved, content, &tmp_path(&resolved.dest))?;

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

fn write_via_tmp(resolved: &Resolved, content: &str, tmp: &Path) -> io::Result<()> {
    let result = write_tmp(tmp, content, resolved.permissions.as_ref())
        .and_then(|()| fs::rename(tmp, &resolved.dest));
    if result.is_err() {
        let _ = fs::remove_file(tmp);
    }
    result
}

fn write_tmp(tmp: &Path, content: &str, permissions: Option<&Permissions>) -> io::Result<()> {
    fs::write(tmp, content)?;
    if let Some(permissions) = permissions {
        fs::set_permissions(tmp, permissions.clone())?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
