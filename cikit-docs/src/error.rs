//! Error types for cikit-docs.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use cikit_core::DescriptorError;

/// Errors that stop a whole run before any descriptor is touched.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The input path exists but is not a directory.
    #[error("input path {path} is not a directory")]
    InputNotDirectory { path: PathBuf },

    /// The input directory exists but cannot be listed.
    #[error("cannot read input directory {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single descriptor did not make it to the archive.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The descriptor file itself could not be read (or is not UTF-8).
    #[error("cannot read descriptor {path}: {source}")]
    ReadDescriptor {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("cannot read target {path}: {source}")]
    TargetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write target {path}: {source}")]
    TargetUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mutation applied, but `processed/` already holds a file of that name.
    #[error("{path} already exists; update applied but descriptor left in place")]
    ArchiveConflict { path: PathBuf },

    /// Mutation applied, but moving the descriptor failed for another reason.
    #[error("cannot archive to {path}: {source}")]
    ArchiveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    pub fn kind(&self) -> FailureKind {
        match self {
            UpdateError::ReadDescriptor { .. } => FailureKind::Malformed,
            UpdateError::Descriptor(DescriptorError::UnknownMode { .. }) => FailureKind::ModeUnknown,
            UpdateError::Descriptor(_) => FailureKind::Malformed,
            UpdateError::TargetUnreadable { .. } => FailureKind::TargetUnreadable,
            UpdateError::TargetUnwritable { .. } => FailureKind::TargetUnwritable,
            UpdateError::ArchiveConflict { .. } => FailureKind::ArchiveConflict,
            UpdateError::ArchiveFailed { .. } => FailureKind::ArchiveFailed,
        }
    }
}

/// Coarse classification of an [`UpdateError`], printed on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Malformed,
    ModeUnknown,
    TargetUnreadable,
    TargetUnwritable,
    ArchiveConflict,
    ArchiveFailed,
}

impl FailureKind {
    /// Whether the target file was already mutated when the failure happened.
    pub fn mutation_applied(self) -> bool {
        matches!(self, FailureKind::ArchiveConflict | FailureKind::ArchiveFailed)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Malformed => "descriptor malformed",
            FailureKind::ModeUnknown => "mode unknown",
            FailureKind::TargetUnreadable => "target unreadable",
            FailureKind::TargetUnwritable => "target unwritable",
            FailureKind::ArchiveConflict => "archive conflict",
            FailureKind::ArchiveFailed => "archive failed",
        };
        f.write_str(s)
    }
}

/// A failed descriptor, named by its file name in the input directory.
#[derive(Debug)]
pub struct DescriptorFailure {
    pub descriptor: String,
    pub error: UpdateError,
}

impl DescriptorFailure {
    pub fn kind(&self) -> FailureKind {
        self.error.kind()
    }
}

impl fmt::Display for DescriptorFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.descriptor, self.kind(), self.error)
    }
}
