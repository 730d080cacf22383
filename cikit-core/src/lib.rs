//! cikit core library: domain types, pipeline output channels, configuration, errors.
//!
//! Public API surface:
//! - [`types`]: the validated [`Descriptor`] and its [`Mutation`], [`OutputKey`]
//! - [`output`]: [`OutputSink`] (`GITHUB_OUTPUT`) and [`StepSummary`] (`GITHUB_STEP_SUMMARY`)
//! - [`config`]: [`CikitConfig`] loaded from `.github/cikit.yaml`
//! - [`error`]: [`DescriptorError`], [`SinkError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod output;
pub mod types;

pub use config::CikitConfig;
pub use error::{ConfigError, DescriptorError, SinkError};
pub use output::{OutputSink, StepSummary};
pub use types::{Descriptor, Mutation, OutputKey};
