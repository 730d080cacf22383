//! `cikit apply-docs [INPUT_DIR]`: apply and archive queued documentation updates.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use cikit_docs::process;

use crate::{Context, RunStatus};

/// Arguments for `cikit apply-docs`.
#[derive(Args, Debug)]
pub struct ApplyDocsArgs {
    /// Directory of pending descriptors (default from config: `.github/doc-updates`).
    pub input_dir: Option<PathBuf>,
}

impl ApplyDocsArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let input_dir = self
            .input_dir
            .unwrap_or_else(|| ctx.work_tree.join(&ctx.config.docs.input_dir));

        let report = match process(&ctx.work_tree, &input_dir, &ctx.config.docs) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("error: {e}");
                return Ok(RunStatus::Usage);
            }
        };

        if report.discovered == 0 {
            println!("No documentation updates found");
        } else {
            println!("Processed {} documentation updates", report.archived.len());
            for name in &report.archived {
                println!("- {name}");
            }
        }

        for failure in &report.failures {
            eprintln!("error: {failure}");
        }

        Ok(if report.is_success() {
            RunStatus::Success
        } else {
            RunStatus::Failure
        })
    }
}
