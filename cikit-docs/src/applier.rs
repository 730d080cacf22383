//! Batch processing of queued documentation updates.
//!
//! Each descriptor moves through `discovered → parsed → applied → archived`.
//! A failure at any step is recorded against that descriptor and the run
//! moves on to the next one; nothing is rolled back. Because the target is
//! rewritten before the descriptor is archived, a crash in between leaves the
//! descriptor queued and it is applied again on the next run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cikit_core::config::DocsConfig;
use cikit_core::Descriptor;

use crate::error::{ApplyError, DescriptorFailure, UpdateError};
use crate::mutate::apply_mutation;
use crate::queue::{self, PendingDescriptor};
use crate::writer::{atomic_write, WriteResult};

/// A descriptor that was applied and archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedUpdate {
    pub descriptor: String,
    /// Target path as resolved against the working tree.
    pub target: PathBuf,
    pub write: WriteResult,
}

/// Summary of one [`process`] run.
#[derive(Debug, Default)]
pub struct ProcessReport {
    /// Descriptors found in the input directory.
    pub discovered: usize,
    /// Names of archived descriptors, in processing order.
    pub archived: Vec<String>,
    pub applied: Vec<AppliedUpdate>,
    pub failures: Vec<DescriptorFailure>,
}

impl ProcessReport {
    /// True iff every discovered descriptor was applied and archived.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Apply every pending descriptor in `input_dir` to files under `work_tree`.
///
/// A missing `input_dir` is an empty, successful run. Per-descriptor problems
/// land in [`ProcessReport::failures`]; only an input path that cannot be
/// listed returns `Err`.
pub fn process(
    work_tree: &Path,
    input_dir: &Path,
    config: &DocsConfig,
) -> Result<ProcessReport, ApplyError> {
    let Some(pending) = queue::discover(input_dir, &config.suffix())? else {
        tracing::debug!("no input directory at {}", input_dir.display());
        return Ok(ProcessReport::default());
    };
    tracing::info!(
        "found {} descriptor(s) in {}",
        pending.len(),
        input_dir.display()
    );

    let mut report = ProcessReport {
        discovered: pending.len(),
        ..ProcessReport::default()
    };

    for item in &pending {
        let name = item.name();
        match process_one(work_tree, input_dir, item) {
            Ok(write) => {
                report.archived.push(name.clone());
                report.applied.push(AppliedUpdate {
                    descriptor: name,
                    target: write.path().to_path_buf(),
                    write,
                });
            }
            Err(error) => {
                tracing::debug!("{name}: {error}");
                report.failures.push(DescriptorFailure {
                    descriptor: name,
                    error,
                });
            }
        }
    }

    Ok(report)
}

fn process_one(
    work_tree: &Path,
    input_dir: &Path,
    item: &PendingDescriptor,
) -> Result<WriteResult, UpdateError> {
    let descriptor = load_descriptor(&item.path)?;
    let write = apply_descriptor(work_tree, &descriptor)?;
    queue::archive(input_dir, item)?;
    Ok(write)
}

/// Read and validate a descriptor file.
pub fn load_descriptor(path: &Path) -> Result<Descriptor, UpdateError> {
    let text = std::fs::read_to_string(path).map_err(|source| UpdateError::ReadDescriptor {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Descriptor::parse(&text)?)
}

/// Apply one descriptor's mutation to its target under `work_tree`.
pub fn apply_descriptor(work_tree: &Path, descriptor: &Descriptor) -> Result<WriteResult, UpdateError> {
    let target = work_tree.join(&descriptor.file);
    let existing = read_target(&target)?;
    let next = apply_mutation(existing.as_deref(), &descriptor.mutation);
    tracing::debug!(
        "{} {} ({} bytes)",
        descriptor.mutation.mode(),
        target.display(),
        next.len()
    );
    atomic_write(&target, &next, existing.as_deref()).map_err(|source| {
        UpdateError::TargetUnwritable {
            path: target.clone(),
            source,
        }
    })
}

/// Current target text; `None` if the file does not exist yet.
pub(crate) fn read_target(target: &Path) -> Result<Option<String>, UpdateError> {
    match std::fs::read_to_string(target) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(UpdateError::TargetUnreadable {
            path: target.to_path_buf(),
            source,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::FailureKind;

    fn write_descriptor(dir: &Path, name: &str, json: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), json).unwrap();
    }

    #[test]
    fn missing_input_is_empty_success() {
        let tree = TempDir::new().unwrap();
        let report = process(tree.path(), &tree.path().join("nope"), &DocsConfig::default()).unwrap();
        assert_eq!(report.discovered, 0);
        assert!(report.archived.is_empty());
        assert!(report.is_success());
        assert!(fs::read_dir(tree.path()).unwrap().next().is_none());
    }

    #[test]
    fn missing_target_parent_is_unwritable_and_not_archived() {
        let tree = TempDir::new().unwrap();
        let input = tree.path().join("updates");
        write_descriptor(&input, "01.json", r#"{"file": "nested/dir/a.md", "content": "x"}"#);

        let report = process(tree.path(), &input, &DocsConfig::default()).unwrap();
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind(), FailureKind::TargetUnwritable);
        assert!(input.join("01.json").exists(), "failed descriptor must stay queued");
        assert!(!input.join("processed").exists());
    }

    #[test]
    fn directory_target_is_unreadable() {
        let tree = TempDir::new().unwrap();
        fs::create_dir(tree.path().join("docs")).unwrap();
        let input = tree.path().join("updates");
        write_descriptor(&input, "01.json", r#"{"file": "docs", "mode": "replace"}"#);

        let report = process(tree.path(), &input, &DocsConfig::default()).unwrap();
        assert_eq!(report.failures[0].kind(), FailureKind::TargetUnreadable);
    }

    #[test]
    fn unchanged_replace_is_still_archived() {
        let tree = TempDir::new().unwrap();
        fs::write(tree.path().join("VERSION"), "2.0.0\n").unwrap();
        let input = tree.path().join("updates");
        write_descriptor(&input, "01.json", r#"{"file": "VERSION", "mode": "replace", "content": "2.0.0"}"#);

        let report = process(tree.path(), &input, &DocsConfig::default()).unwrap();
        assert!(report.is_success());
        assert!(matches!(report.applied[0].write, WriteResult::Unchanged { .. }));
        assert_eq!(report.archived, vec!["01.json"]);
    }

    #[test]
    fn custom_extension_is_honoured() {
        let tree = TempDir::new().unwrap();
        let input = tree.path().join("updates");
        write_descriptor(&input, "01.update", r#"{"file": "a.md", "content": "x"}"#);
        write_descriptor(&input, "02.json", r#"{"file": "b.md", "content": "y"}"#);

        let config = DocsConfig {
            extension: "update".to_string(),
            ..DocsConfig::default()
        };
        let report = process(tree.path(), &input, &config).unwrap();
        assert_eq!(report.archived, vec!["01.update"]);
        assert!(!tree.path().join("b.md").exists());
    }
}
