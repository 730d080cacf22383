//! cikit: CI pipeline helpers.
//!
//! # Usage
//!
//! ```text
//! cikit apply-docs [INPUT_DIR]
//! cikit diff-docs [INPUT_DIR]
//! cikit detect-dockerfile
//! cikit detect-frontend
//! cikit frontend-dir
//! cikit target-repos
//! cikit validate-compose
//! cikit buf-generate
//! cikit verify-plugins
//! cikit security-summary
//! ```
//!
//! Exit codes: `0` success, `1` a helper reported failure, `2` usage error.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cikit_core::{config, CikitConfig, OutputSink, StepSummary};
use commands::{
    apply_docs::ApplyDocsArgs, buf::BufGenerateArgs, compose::ValidateComposeArgs,
    diff_docs::DiffDocsArgs, dockerfile::DetectDockerfileArgs, frontend::DetectFrontendArgs,
    frontend_dir::FrontendDirArgs, plugins::VerifyPluginsArgs, security::SecuritySummaryArgs,
    target_repos::TargetReposArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "cikit",
    version,
    about = "Helpers for CI pipeline steps",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply queued documentation updates and archive them.
    ApplyDocs(ApplyDocsArgs),

    /// Show unified diffs of what apply-docs would change.
    DiffDocs(DiffDocsArgs),

    /// Find the container build file.
    DetectDockerfile(DetectDockerfileArgs),

    /// Find the frontend package manifest.
    DetectFrontend(DetectFrontendArgs),

    /// Resolve the frontend working directory from REPOSITORY_CONFIG.
    FrontendDir(FrontendDirArgs),

    /// List sync target repositories.
    TargetRepos(TargetReposArgs),

    /// Validate container-composition files.
    ValidateCompose(ValidateComposeArgs),

    /// Run `buf generate` when a generation config exists.
    BufGenerate(BufGenerateArgs),

    /// Check that the Python code-generation plugins import.
    VerifyPlugins(VerifyPluginsArgs),

    /// Write the security scan summary to the step summary.
    SecuritySummary(SecuritySummaryArgs),
}

// ---------------------------------------------------------------------------
// Shared run state
// ---------------------------------------------------------------------------

/// How a subcommand finished; mapped to the process exit code in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
    Usage,
    /// Exit code of an external tool, passed through.
    Code(u8),
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::from(1),
            RunStatus::Usage => ExitCode::from(2),
            RunStatus::Code(code) => ExitCode::from(code),
        }
    }
}

/// Everything a subcommand reads from its environment, gathered once.
pub struct Context {
    pub work_tree: PathBuf,
    pub config: CikitConfig,
    pub output: OutputSink,
    pub summary: StepSummary,
}

impl Context {
    fn load() -> Result<Self, cikit_core::ConfigError> {
        let work_tree = PathBuf::from(".");
        let config = config::load_at(&work_tree)?;
        Ok(Context {
            work_tree,
            config,
            output: OutputSink::from_env(),
            summary: StepSummary::from_env(),
        })
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

/// Diagnostics go to stderr so stdout stays the helpers' report.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("CIKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(command: Commands, ctx: &Context) -> Result<RunStatus> {
    match command {
        Commands::ApplyDocs(args) => args.run(ctx),
        Commands::DiffDocs(args) => args.run(ctx),
        Commands::DetectDockerfile(args) => args.run(ctx),
        Commands::DetectFrontend(args) => args.run(ctx),
        Commands::FrontendDir(args) => args.run(ctx),
        Commands::TargetRepos(args) => args.run(ctx),
        Commands::ValidateCompose(args) => args.run(ctx),
        Commands::BufGenerate(args) => args.run(ctx),
        Commands::VerifyPlugins(args) => args.run(ctx),
        Commands::SecuritySummary(args) => args.run(ctx),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let ctx = match Context::load() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {e}");
            return RunStatus::Usage.into();
        }
    };

    match run(cli.command, &ctx) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            RunStatus::Failure.into()
        }
    }
}
