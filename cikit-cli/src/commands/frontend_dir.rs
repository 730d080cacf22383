//! `cikit frontend-dir`: resolve the frontend working directory.

use anyhow::{Context as _, Result};
use clap::Args;

use cikit_detector::frontend_working_dir;

use crate::{Context, RunStatus};

/// Arguments for `cikit frontend-dir`.
#[derive(Args, Debug)]
pub struct FrontendDirArgs {
    /// Repository config JSON; `working_directories.frontend` is used.
    #[arg(long, env = "REPOSITORY_CONFIG")]
    pub repository_config: Option<String>,
}

impl FrontendDirArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let found = frontend_working_dir(self.repository_config.as_deref());

        ctx.output
            .emit_all([
                ("dir", found.dir.as_str()),
                ("cache-path", found.cache_path.as_str()),
            ])
            .context("failed to write step outputs")?;

        println!("{}", found.dir);
        Ok(RunStatus::Success)
    }
}
