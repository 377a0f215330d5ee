//! Runner subprocess executor.
//!
//! Spawns the invocation directly (no shell), relays stdout line by line
//! while the child runs, and captures stderr for the failure report.

use super::invocation::Invocation;
use crate::error::{Result, RunnerError};
use crate::exit_codes;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use tracing::debug;

/// Execute an invocation and return the runner's exit code.
///
/// A non-zero exit is not an error: the code is returned unchanged after the
/// exit notice and captured stderr are written to `err`.
pub fn execute(invocation: &Invocation, out: &mut dyn Write, err: &mut dyn Write) -> Result<i32> {
    let (program, args) = invocation
        .argv
        .split_first()
        .ok_or_else(|| RunnerError::EmptyCommand {
            runner: invocation.runner.clone(),
        })?;

    let mut child = Command::new(program)
        .args(args)
        .current_dir(&invocation.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RunnerError::CommandNotFound {
                runner: invocation.runner.clone(),
                program: program.clone(),
            },
            _ => RunnerError::SpawnFailed {
                program: program.clone(),
                source: e,
            },
        })?;

    // Drain stderr off-thread so a chatty child never blocks on a full pipe
    // while we are reading stdout.
    let stderr_pipe = child.stderr.take();
    let stderr_reader = thread::spawn(move || -> io::Result<Vec<u8>> {
        let mut captured = Vec::new();
        if let Some(mut pipe) = stderr_pipe {
            pipe.read_to_end(&mut captured)?;
        }
        Ok(captured)
    });

    // Reap the child even when relaying fails.
    let relayed = match child.stdout.take() {
        Some(stdout_pipe) => relay_lines(stdout_pipe, out),
        None => Ok(()),
    };

    let status = child
        .wait()
        .map_err(|e| RunnerError::io("failed to wait for runner", e))?;

    let captured = stderr_reader
        .join()
        .map_err(|_| {
            RunnerError::io(
                "failed to capture runner error output",
                io::Error::other("stderr reader panicked"),
            )
        })?
        .map_err(|e| RunnerError::io("failed to capture runner error output", e))?;

    relayed.map_err(|e| RunnerError::io("failed to relay runner output", e))?;

    let code = exit_code(status);
    debug!(runner = %invocation.runner, code, "runner exited");

    if code != exit_codes::SUCCESS {
        report_failure(code, &captured, err)
            .map_err(|e| RunnerError::io("failed to report runner failure", e))?;
    }

    Ok(code)
}

/// Copy `source` to `sink` one line at a time, flushing after each line.
///
/// Lines are relayed as raw bytes, so non-UTF-8 output passes through intact.
fn relay_lines(source: impl Read, sink: &mut dyn Write) -> io::Result<()> {
    let mut reader = BufReader::new(source);
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        sink.write_all(&line)?;
        sink.flush()?;
    }

    Ok(())
}

fn report_failure(code: i32, captured: &[u8], err: &mut dyn Write) -> io::Result<()> {
    writeln!(err, "\n--- Runner exited with code {} ---", code)?;
    if !captured.is_empty() {
        writeln!(err, "Error output:\n{}", String::from_utf8_lossy(captured))?;
    }
    err.flush()
}

/// Map an exit status to a process exit code.
///
/// A child killed by a signal reports `128 + signal` on Unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }

    exit_codes::FAILURE
}
