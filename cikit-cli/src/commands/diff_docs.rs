//! `cikit diff-docs [INPUT_DIR]`: show what apply-docs would change.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use cikit_docs::preview;

use crate::{Context, RunStatus};

/// Arguments for `cikit diff-docs`.
#[derive(Args, Debug)]
pub struct DiffDocsArgs {
    /// Directory of pending descriptors (default from config: `.github/doc-updates`).
    pub input_dir: Option<PathBuf>,
}

impl DiffDocsArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let input_dir = self
            .input_dir
            .unwrap_or_else(|| ctx.work_tree.join(&ctx.config.docs.input_dir));

        let report = match preview(&ctx.work_tree, &input_dir, &ctx.config.docs) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("error: {e}");
                return Ok(RunStatus::Usage);
            }
        };

        if report.diffs.is_empty() && report.failures.is_empty() {
            println!("No differences.");
        }

        for diff in &report.diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        for failure in &report.failures {
            eprintln!("error: {failure}");
        }

        Ok(if report.failures.is_empty() {
            RunStatus::Success
        } else {
            RunStatus::Failure
        })
    }
}
