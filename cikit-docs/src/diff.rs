//! Dry-run unified diff support for `cikit diff-docs`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use cikit_core::config::DocsConfig;

use crate::applier::{load_descriptor, read_target};
use crate::error::{ApplyError, DescriptorFailure, UpdateError};
use crate::mutate::{apply_mutation, normalize_line_endings};
use crate::queue;
use crate::writer;

/// A single target file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Target path relative to the working tree.
    pub path: PathBuf,
    pub unified_diff: String,
}

/// What [`crate::process`] would change, computed without touching disk.
#[derive(Debug, Default)]
pub struct PreviewReport {
    pub discovered: usize,
    pub diffs: Vec<FileDiff>,
    pub failures: Vec<DescriptorFailure>,
}

struct Staged {
    before: String,
    after: Option<String>,
}

/// Current text of `target`. A missing target must be creatable, as it
/// always is written by [`crate::process`].
fn stage_target(target: &Path) -> Result<Option<String>, UpdateError> {
    let existing = read_target(target)?;
    if existing.is_none() {
        writer::ensure_writable(target).map_err(|source| UpdateError::TargetUnwritable {
            path: target.to_path_buf(),
            source,
        })?;
    }
    Ok(existing)
}

/// Compose all pending descriptors in memory and diff each touched target.
///
/// Descriptors hitting the same file compose in file-name order exactly as
/// they would on disk. Diffs are sorted by target path.
pub fn preview(
    work_tree: &Path,
    input_dir: &Path,
    config: &DocsConfig,
) -> Result<PreviewReport, ApplyError> {
    let Some(pending) = queue::discover(input_dir, &config.suffix())? else {
        return Ok(PreviewReport::default());
    };

    let mut report = PreviewReport {
        discovered: pending.len(),
        ..PreviewReport::default()
    };
    let mut staged: BTreeMap<PathBuf, Staged> = BTreeMap::new();

    for item in &pending {
        let descriptor = match load_descriptor(&item.path) {
            Ok(descriptor) => descriptor,
            Err(error) => {
                report.failures.push(DescriptorFailure {
                    descriptor: item.name(),
                    error,
                });
                continue;
            }
        };

        let entry = match staged.entry(descriptor.file.clone()) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => match stage_target(&work_tree.join(&descriptor.file)) {
                Ok(existing) => vacant.insert(Staged {
                    before: existing
                        .as_deref()
                        .map(normalize_line_endings)
                        .unwrap_or_default(),
                    after: existing,
                }),
                Err(error) => {
                    report.failures.push(DescriptorFailure {
                        descriptor: item.name(),
                        error,
                    });
                    continue;
                }
            },
        };
        entry.after = Some(apply_mutation(entry.after.as_deref(), &descriptor.mutation));
    }

    for (path, stage) in staged {
        let after = stage.after.unwrap_or_default();
        if stage.before == after {
            continue;
        }
        let old_header = format!("a/{}", path.display());
        let new_header = format!("b/{}", path.display());
        let unified = TextDiff::from_lines(&stage.before, &after)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();
        report.diffs.push(FileDiff {
            path,
            unified_diff: unified,
        });
    }

    Ok(report)
}
