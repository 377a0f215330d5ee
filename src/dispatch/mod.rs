//! Runner dispatch: resolve a runner for a task file and execute it.
//!
//! Dispatch happens in two steps:
//!
//! 1. [`Invocation::prepare`] looks up the runner, reads the task file and
//!    builds the final prompt and argv. No process is started.
//! 2. [`execute`] spawns the argv in the task's directory, relays stdout live
//!    and returns the runner's exit code.

mod executor;
mod invocation;

pub use executor::execute;
pub use invocation::Invocation;

use crate::error::Result;
use crate::manifest::Runners;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Run `task_path` through the runner named `runner_name`.
///
/// Returns the runner's exit code. Local failures (unknown runner, missing
/// task file, spawn errors) are returned as errors before or instead of
/// spawning.
pub fn dispatch(
    task_path: &Path,
    runner_name: &str,
    runners: &Runners,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32> {
    let invocation = Invocation::prepare(task_path, runner_name, runners)?;

    info!(
        runner = %invocation.runner,
        program = invocation.program(),
        working_dir = %invocation.working_dir.display(),
        "dispatching runner"
    );
    debug!(
        command = %invocation.display_command(),
        prompt_bytes = invocation.prompt.len(),
        "runner command"
    );

    execute(&invocation, out, err)
}
