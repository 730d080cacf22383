//! Repository probes for the `cikit` helper commands.
//!
//! Every probe takes a working-tree root plus its config section and returns a
//! plain value. Emitting pipeline outputs and printing is the caller's job.

use std::path::PathBuf;

use thiserror::Error;

pub mod compose;
pub mod dockerfile;
pub mod frontend;
pub mod frontend_dir;
pub mod protobuf;
pub mod repos;
pub mod tools;

pub use compose::{compose_files, validate_compose_file};
pub use dockerfile::{detect_dockerfile, DockerfileDetection};
pub use frontend::{detect_frontend_package, FrontendPackage};
pub use frontend_dir::{frontend_working_dir, FrontendDir};
pub use protobuf::{buf_config, check_python_module, run_buf_generate};
pub use repos::{parse_repository_list, target_repos};
pub use tools::{ToolOutput, ToolRunner};

/// Errors from repository probes and tool invocations.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} not found")]
    RepositoriesNotFound { path: PathBuf },

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DetectError {
    DetectError::Io {
        path: path.into(),
        source,
    }
}
