//! `cikit target-repos`: list sync target repositories.

use anyhow::{Context as _, Result};
use clap::Args;

use cikit_detector::{target_repos, DetectError};

use crate::{Context, RunStatus};

/// Arguments for `cikit target-repos`.
#[derive(Args, Debug)]
pub struct TargetReposArgs {}

impl TargetReposArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let repos = match target_repos(&ctx.work_tree, &ctx.config.repositories) {
            Ok(repos) => repos,
            Err(e @ DetectError::RepositoriesNotFound { .. }) => {
                eprintln!("error: {e}");
                Vec::new()
            }
            Err(e) => return Err(e).context("failed to read repository list"),
        };

        if repos.is_empty() {
            eprintln!("No target repositories found");
            return Ok(RunStatus::Failure);
        }

        let joined = repos.join(" ");
        ctx.output
            .emit("target_repos", &joined)
            .context("failed to write step outputs")?;

        println!("Found {} target repositories: {joined}", repos.len());
        Ok(RunStatus::Success)
    }
}
