//! `cikit buf-generate`: run `buf generate` when configured.

use anyhow::Result;
use clap::Args;

use cikit_detector::{buf_config, run_buf_generate, ToolRunner};

use crate::{Context, RunStatus};

/// Arguments for `cikit buf-generate`.
#[derive(Args, Debug)]
pub struct BufGenerateArgs {}

impl BufGenerateArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let protobuf = &ctx.config.protobuf;
        if buf_config(&ctx.work_tree, protobuf).is_none() {
            println!(
                "No {} found, skipping generation",
                protobuf.buf_config.display()
            );
            return Ok(RunStatus::Success);
        }

        println!("Running {} generate...", protobuf.buf_program);
        let status = run_buf_generate(&ToolRunner::new(&ctx.work_tree), protobuf)?;
        if status.success() {
            println!("{} generate completed successfully", protobuf.buf_program);
            return Ok(RunStatus::Success);
        }

        eprintln!("{} generate failed", protobuf.buf_program);
        Ok(match status.code().and_then(|code| u8::try_from(code).ok()) {
            Some(code) if code != 0 => RunStatus::Code(code),
            _ => RunStatus::Failure,
        })
    }
}
