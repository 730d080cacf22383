//! `cikit validate-compose`: validate container-composition files.

use anyhow::Result;
use clap::Args;

use cikit_detector::{compose_files, validate_compose_file, ToolRunner};

use crate::{Context, RunStatus};

/// Arguments for `cikit validate-compose`.
#[derive(Args, Debug)]
pub struct ValidateComposeArgs {}

impl ValidateComposeArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let files = compose_files(&ctx.work_tree, &ctx.config.compose);
        if files.is_empty() {
            println!("No Docker Compose files found");
            return Ok(RunStatus::Success);
        }

        let runner = ToolRunner::new(&ctx.work_tree);
        let mut status = RunStatus::Success;
        for file in &files {
            let output = validate_compose_file(&runner, &ctx.config.compose, file)?;
            if output.success {
                println!("{} is valid", file.display());
            } else {
                println!("{} validation failed:\n{}", file.display(), output.stderr);
                status = RunStatus::Failure;
            }
        }
        Ok(status)
    }
}
