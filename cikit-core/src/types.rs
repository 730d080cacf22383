//! Domain types shared by the cikit helpers.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! Descriptors are only constructed through [`Descriptor::parse`], so a value of
//! the type is always valid.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::{DescriptorError, SinkError};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A validated pipeline output key: non-empty, letters, digits, `-` and `_` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputKey(String);

impl OutputKey {
    pub fn new(key: impl Into<String>) -> Result<Self, SinkError> {
        let key = key.into();
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(key))
        } else {
            Err(SinkError::InvalidKey { key })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// The mutation a descriptor performs on its target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Append `content` after the existing text (trailing whitespace stripped).
    Append(String),
    /// Truncate the target and write `content`.
    Replace(String),
}

impl Mutation {
    pub fn content(&self) -> &str {
        match self {
            Mutation::Append(content) | Mutation::Replace(content) => content,
        }
    }

    /// The on-disk `mode` name.
    pub fn mode(&self) -> &'static str {
        match self {
            Mutation::Append(_) => "append",
            Mutation::Replace(_) => "replace",
        }
    }
}

/// One queued documentation edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Target path relative to the working tree, lexically normalised.
    pub file: PathBuf,
    pub mutation: Mutation,
}

/// Wire shape of a descriptor file. Never exposed; see [`Descriptor::parse`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescriptor {
    file: String,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    content: String,
}

impl Descriptor {
    /// Decode and validate a descriptor from its JSON text.
    pub fn parse(text: &str) -> Result<Self, DescriptorError> {
        let raw: RawDescriptor = serde_json::from_str(text)?;
        let file = normalize_relative(&raw.file)?;
        let mutation = match raw.mode.as_deref() {
            None | Some("append") => Mutation::Append(raw.content),
            Some("replace") => Mutation::Replace(raw.content),
            Some(other) => {
                return Err(DescriptorError::UnknownMode {
                    mode: other.to_string(),
                })
            }
        };
        Ok(Self { file, mutation })
    }
}

/// Resolve `.` and `..` lexically, rejecting anything that leaves the root.
fn normalize_relative(raw: &str) -> Result<PathBuf, DescriptorError> {
    if raw.trim().is_empty() {
        return Err(DescriptorError::EmptyFile);
    }
    let mut out = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return Err(DescriptorError::EscapesWorkTree {
                        file: raw.to_string(),
                    });
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(DescriptorError::AbsoluteFile {
                    file: raw.to_string(),
                })
            }
        }
    }
    if out.as_os_str().is_empty() {
        return Err(DescriptorError::EmptyFile);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
