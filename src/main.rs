//! prp-runner: execute a PRP file through a configurable backend agent CLI.
//!
//! This is the main entry point for the `prp-runner` CLI. It parses
//! arguments, sets up logging, dispatches the task to the selected runner,
//! and exits with the runner's exit code (or 1 on a local failure).

mod cli;
mod commands;
pub mod dispatch;
pub mod error;
pub mod exit_codes;
mod logging;
pub mod manifest;
pub mod prompt;

use cli::Cli;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.log_level);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = commands::run(cli, &mut stdout.lock(), &mut stderr.lock());

    ExitCode::from(exit_codes::to_process_code(code))
}
