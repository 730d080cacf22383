//! Pipeline output channels.
//!
//! The pipeline hands each step two append-only files through environment
//! variables: `GITHUB_OUTPUT` for `key=value` records and
//! `GITHUB_STEP_SUMMARY` for Markdown. Both sinks take the channel path
//! explicitly; `from_env` is the only place the environment is consulted.
//!
//! Each write opens the channel in append mode, writes, and closes it again.
//! A sink without a channel validates its input and then does nothing, so the
//! helpers can run locally without side effects.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SinkError;
use crate::types::OutputKey;

/// Environment variable naming the `key=value` output channel.
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Environment variable naming the Markdown step summary channel.
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

fn channel_from_env(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn non_empty(channel: Option<PathBuf>) -> Option<PathBuf> {
    channel.filter(|path| !path.as_os_str().is_empty())
}

fn io_err(path: &Path, source: std::io::Error) -> SinkError {
    SinkError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn append_to_channel(path: &Path, text: &str) -> Result<(), SinkError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_err(path, e))?;
    file.write_all(text.as_bytes()).map_err(|e| io_err(path, e))?;
    file.flush().map_err(|e| io_err(path, e))
}

// ---------------------------------------------------------------------------
// OutputSink
// ---------------------------------------------------------------------------

/// Writes `key=value` records to the pipeline output channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSink {
    channel: Option<PathBuf>,
}

impl OutputSink {
    /// A sink appending to `channel`; `None` (or an empty path) disables it.
    pub fn new(channel: Option<PathBuf>) -> Self {
        Self {
            channel: non_empty(channel),
        }
    }

    /// Read `GITHUB_OUTPUT` once. Unset or empty yields a disabled sink.
    pub fn from_env() -> Self {
        Self::new(channel_from_env(OUTPUT_ENV))
    }

    /// Append one `key=value\n` record.
    ///
    /// Invalid keys and multi-line values are rejected even when the sink is
    /// disabled.
    pub fn emit(&self, key: &str, value: &str) -> Result<(), SinkError> {
        let key = OutputKey::new(key)?;
        if value.contains(['\n', '\r']) {
            return Err(SinkError::InvalidValue {
                key: key.to_string(),
            });
        }
        let Some(channel) = self.channel.as_deref() else {
            tracing::debug!("{OUTPUT_ENV} unset; dropping output {key}");
            return Ok(());
        };
        append_to_channel(channel, &format!("{key}={value}\n"))?;
        tracing::debug!("output {key}={value}");
        Ok(())
    }

    /// Emit each record in order, stopping at the first error.
    pub fn emit_all<'a, I>(&self, records: I) -> Result<(), SinkError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in records {
            self.emit(key, value)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// StepSummary
// ---------------------------------------------------------------------------

/// Appends Markdown to the pipeline step summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSummary {
    channel: Option<PathBuf>,
}

impl StepSummary {
    pub fn new(channel: Option<PathBuf>) -> Self {
        Self {
            channel: non_empty(channel),
        }
    }

    /// Read `GITHUB_STEP_SUMMARY` once. Unset or empty yields a disabled summary.
    pub fn from_env() -> Self {
        Self::new(channel_from_env(STEP_SUMMARY_ENV))
    }

    pub fn channel(&self) -> Option<&Path> {
        self.channel.as_deref()
    }

    /// Append `text` verbatim.
    pub fn append(&self, text: &str) -> Result<(), SinkError> {
        match self.channel.as_deref() {
            Some(channel) => append_to_channel(channel, text),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
