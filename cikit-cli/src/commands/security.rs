//! `cikit security-summary`: render scan results into the step summary.

use anyhow::{Context as _, Result};
use clap::Args;

use cikit_renderer::{SecuritySummary, SummaryRenderer};

use crate::{Context, RunStatus};

/// Scan job results, normally passed in by the workflow.
#[derive(Args, Debug)]
pub struct SecuritySummaryArgs {
    #[arg(long, env = "RESULT_CODEQL")]
    pub codeql: Option<String>,

    #[arg(long, env = "RESULT_DEP_REVIEW")]
    pub dependency_review: Option<String>,

    #[arg(long, env = "RESULT_SECURITY_AUDIT")]
    pub security_audit: Option<String>,

    #[arg(long, env = "RESULT_TRIVY")]
    pub trivy: Option<String>,
}

impl SecuritySummaryArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let summary = SecuritySummary::from_statuses(
            self.codeql.as_deref(),
            self.dependency_review.as_deref(),
            self.security_audit.as_deref(),
            self.trivy.as_deref(),
        );

        let renderer = SummaryRenderer::new().context("failed to load summary template")?;
        let markdown = renderer
            .render_security(&summary)
            .context("failed to render security summary")?;

        if ctx.summary.channel().is_none() {
            print!("{markdown}");
        }
        ctx.summary
            .append(&markdown)
            .context("failed to write step summary")?;

        Ok(if summary.has_failures {
            RunStatus::Failure
        } else {
            RunStatus::Success
        })
    }
}
