//! # cikit-docs
//!
//! Applies queued documentation updates to a working tree.
//!
//! Call [`process`] to apply and archive every pending descriptor in an input
//! directory, or [`preview`] to see the resulting unified diffs without
//! writing anything.

pub mod applier;
pub mod diff;
pub mod error;
pub mod mutate;
pub mod queue;
pub mod writer;

pub use applier::{process, AppliedUpdate, ProcessReport};
pub use diff::{preview, FileDiff, PreviewReport};
pub use error::{ApplyError, DescriptorFailure, FailureKind, UpdateError};
pub use writer::WriteResult;
