//! Container-composition files.

use std::path::{Path, PathBuf};

use cikit_core::config::ComposeConfig;

use crate::tools::{ToolOutput, ToolRunner};
use crate::DetectError;

/// Configured composition files that exist under `root`, in config order.
pub fn compose_files(root: &Path, config: &ComposeConfig) -> Vec<PathBuf> {
    config
        .files
        .iter()
        .filter(|file| root.join(file).is_file())
        .cloned()
        .collect()
}

/// Run `<program> -f <file> config` and capture the result.
pub fn validate_compose_file(
    runner: &ToolRunner,
    config: &ComposeConfig,
    file: &Path,
) -> Result<ToolOutput, DetectError> {
    let file = file.to_string_lossy();
    runner.capture(&config.program, &["-f", &*file, "config"])
}
