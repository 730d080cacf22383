//! `buf generate` and the Python plugins it relies on.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use cikit_core::config::ProtobufConfig;

use crate::tools::{ToolOutput, ToolRunner};
use crate::DetectError;

/// The buf generation config under `root`, if present.
pub fn buf_config(root: &Path, config: &ProtobufConfig) -> Option<PathBuf> {
    let path = root.join(&config.buf_config);
    path.is_file().then_some(path)
}

/// Run `buf generate` with inherited stdio.
pub fn run_buf_generate(runner: &ToolRunner, config: &ProtobufConfig) -> Result<ExitStatus, DetectError> {
    runner.inherit(&config.buf_program, &["generate"])
}

/// Try `import <module>` in the configured interpreter.
pub fn check_python_module(
    runner: &ToolRunner,
    config: &ProtobufConfig,
    module: &str,
) -> Result<ToolOutput, DetectError> {
    let statement = format!("import {module}");
    runner.capture(&config.python, &["-c", statement.as_str()])
}
