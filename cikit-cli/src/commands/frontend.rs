//! `cikit detect-frontend`: emit frontend package metadata.

use anyhow::{Context as _, Result};
use clap::Args;

use cikit_detector::detect_frontend_package;

use crate::{Context, RunStatus};

/// Arguments for `cikit detect-frontend`.
#[derive(Args, Debug)]
pub struct DetectFrontendArgs {}

impl DetectFrontendArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let pkg = detect_frontend_package(&ctx.work_tree, &ctx.config.frontend)
            .context("frontend package detection failed")?;

        ctx.output
            .emit_all([
                ("has-package", if pkg.has_package { "true" } else { "false" }),
                ("package-dir", pkg.dir.as_str()),
                ("package-name", pkg.name.as_str()),
                ("package-version", pkg.version.as_str()),
                ("package-manager", pkg.manager.as_str()),
            ])
            .context("failed to write step outputs")?;

        if pkg.has_package {
            println!(
                "Detected frontend package {}@{} in {} ({})",
                pkg.name, pkg.version, pkg.dir, pkg.manager
            );
        } else {
            println!("No frontend package found");
        }
        Ok(RunStatus::Success)
    }
}
