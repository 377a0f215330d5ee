//! CLI argument parsing for prp-runner.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the argument structure; the implementation lives in
//! the `commands` module.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Execute a PRP file using a specified backend agent.
///
/// The runner's command template is filled with the PRP content (optionally
/// wrapped in the runner's system prompt) and executed in the PRP file's
/// directory. The runner's stdout is streamed live and its exit code is
/// returned.
#[derive(Parser, Debug)]
#[command(name = "prp-runner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the .md PRP file to execute.
    #[arg(long, value_name = "PATH", required_unless_present = "list_runners")]
    pub prp: Option<PathBuf>,

    /// The name of the runner to use (e.g., 'claude-cli').
    #[arg(long, value_name = "NAME", required_unless_present = "list_runners")]
    pub runner: Option<String>,

    /// Runner manifest to load instead of the default `default_runners.json`.
    #[arg(long, value_name = "PATH", env = "PRP_RUNNER_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// List the runners defined in the manifest and exit.
    #[arg(long)]
    pub list_runners: bool,

    /// Diagnostic logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PRP_RUNNER_LOG` or `warn` is used. Logs go to stderr.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
