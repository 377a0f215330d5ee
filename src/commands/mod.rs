//! Command implementations for prp-runner.
//!
//! Routes parsed CLI arguments to either runner dispatch or runner listing,
//! and turns every local failure into a one-line message plus exit code.

mod list;


use crate::cli::Cli;
use crate::dispatch::dispatch;
use crate::error::{Result, RunnerError};
use crate::exit_codes;
use crate::manifest::{default_manifest_path, load_runners};
use std::io::Write;

/// Run the CLI and return the process exit code.
///
/// Runner stdout and the listing go to `out`; error messages and the
/// non-zero exit report go to `err`.
pub fn run(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match execute_cli(cli, out, err) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}

fn execute_cli(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> Result<i32> {
    // The manifest is loaded before the task file is looked at.
    let manifest = cli.manifest.unwrap_or_else(default_manifest_path);
    let runners = load_runners(&manifest)?;

    if cli.list_runners {
        list::cmd_list(&runners, out)?;
        return Ok(exit_codes::SUCCESS);
    }

    let prp = cli
        .prp
        .ok_or_else(|| RunnerError::Usage("--prp is required".to_string()))?;
    let runner = cli
        .runner
        .ok_or_else(|| RunnerError::Usage("--runner is required".to_string()))?;

    dispatch(&prp, &runner, &runners, out, err)
}
