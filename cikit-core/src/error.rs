//! Error types for cikit-core.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a documentation-update descriptor is rejected before it is applied.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Not valid JSON, not an object, a field of the wrong type, a missing
    /// `file`, or an unknown field.
    #[error("invalid descriptor: {0}")]
    Json(#[from] serde_json::Error),

    /// `file` was present but empty (or normalised to nothing, like `"."`).
    #[error("`file` must name a path inside the working tree")]
    EmptyFile,

    /// `file` was an absolute path.
    #[error("`file` must be relative to the working tree, got '{file}'")]
    AbsoluteFile { file: String },

    /// `file` climbs above the working tree root with `..`.
    #[error("`file` escapes the working tree: '{file}'")]
    EscapesWorkTree { file: String },

    /// `mode` was neither `append` nor `replace`.
    #[error("unknown mode '{mode}'; expected: append, replace")]
    UnknownMode { mode: String },
}

/// Errors from emitting records to a pipeline channel.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Key is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid output key '{key}': expected letters, digits, '-' or '_'")]
    InvalidKey { key: String },

    /// Value contains a line break.
    #[error("invalid value for output '{key}': values must be a single line")]
    InvalidValue { key: String },

    /// The channel file could not be opened or appended to.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from loading `.github/cikit.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error with file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Parsed, but a value is unusable.
    #[error("invalid config at {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}
