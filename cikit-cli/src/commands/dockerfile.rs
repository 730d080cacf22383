//! `cikit detect-dockerfile`: pick the container build file.

use anyhow::{Context as _, Result};
use clap::Args;

use cikit_detector::detect_dockerfile;

use crate::{Context, RunStatus};

/// Arguments for `cikit detect-dockerfile`.
#[derive(Args, Debug)]
pub struct DetectDockerfileArgs {
    /// Build file to try before the configured candidates.
    #[arg(long = "override", env = "OVERRIDE_DOCKERFILE")]
    pub override_path: Option<String>,
}

impl DetectDockerfileArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let found = detect_dockerfile(
            &ctx.work_tree,
            &ctx.config.dockerfile,
            self.override_path.as_deref(),
        );
        let should_build = if found.should_build { "true" } else { "false" };

        ctx.output
            .emit_all([
                ("dockerfile-path", found.path.as_str()),
                ("should-build", should_build),
            ])
            .context("failed to write step outputs")?;

        println!(
            "Detected Dockerfile: {} (should_build={should_build})",
            found.path
        );
        Ok(RunStatus::Success)
    }
}
