//! `cikit verify-plugins`: check the Python code-generation plugins.

use anyhow::Result;
use clap::Args;

use cikit_detector::{check_python_module, DetectError, ToolRunner};

use crate::{Context, RunStatus};

/// Arguments for `cikit verify-plugins`.
#[derive(Args, Debug)]
pub struct VerifyPluginsArgs {}

impl VerifyPluginsArgs {
    pub fn run(self, ctx: &Context) -> Result<RunStatus> {
        let protobuf = &ctx.config.protobuf;
        let runner = ToolRunner::new(&ctx.work_tree);

        let mut missing = Vec::new();
        for module in &protobuf.python_plugins {
            let reason = match check_python_module(&runner, protobuf, module) {
                Ok(output) if output.success => {
                    println!("✅ {module} available");
                    continue;
                }
                Ok(output) => output.error_line().to_string(),
                Err(e @ DetectError::Spawn { .. }) => e.to_string(),
                Err(e) => return Err(e.into()),
            };
            println!("::error::Failed to import {module}: {reason}");
            missing.push(module.as_str());
        }

        if missing.is_empty() {
            return Ok(RunStatus::Success);
        }
        println!(
            "::error::Missing required Python protobuf plugins: {}",
            missing.join(", ")
        );
        Ok(RunStatus::Failure)
    }
}
