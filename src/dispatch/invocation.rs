//! Invocation construction: runner lookup, task loading, prompt and argv.

use crate::error::{Result, RunnerError};
use crate::manifest::Runners;
use crate::prompt::{build_command, generate_prompt};
use std::path::{Path, PathBuf};

/// A fully resolved runner command, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Name of the runner this invocation was built from.
    pub runner: String,
    /// Literal argv; `argv[0]` is the program.
    pub argv: Vec<String>,
    /// Directory containing the task file; the child runs here.
    pub working_dir: PathBuf,
    /// The final prompt substituted into `argv`.
    pub prompt: String,
}

impl Invocation {
    /// Resolve a runner and task file into a spawnable command.
    ///
    /// The runner is looked up before the task file is touched; its command
    /// template is only checked once the task has been read. Nothing here
    /// starts a process.
    pub fn prepare(task_path: &Path, runner_name: &str, runners: &Runners) -> Result<Self> {
        let runner = runners.require(runner_name)?;

        if !task_path.exists() {
            return Err(RunnerError::TaskFileNotFound {
                path: task_path.to_path_buf(),
            });
        }
        let content =
            std::fs::read_to_string(task_path).map_err(|e| RunnerError::TaskFileUnreadable {
                path: task_path.to_path_buf(),
                source: e,
            })?;

        if runner.command_template.is_empty() {
            return Err(RunnerError::EmptyCommand {
                runner: runner.name.clone(),
            });
        }

        let working_dir = task_dir(task_path);
        let prompt = generate_prompt(runner, &content, &working_dir.to_string_lossy());
        let argv = build_command(runner, &prompt);

        Ok(Self {
            runner: runner.name.clone(),
            argv,
            working_dir,
            prompt,
        })
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    /// Shell-quoted rendering of the argv, for diagnostics only.
    pub fn display_command(&self) -> String {
        shell_words::join(&self.argv)
    }
}

/// Directory containing `task_path`; a bare file name lives in `.`.
fn task_dir(task_path: &Path) -> PathBuf {
    match task_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn runners(json: &str) -> Runners {
        Runners::from_json(json, "runners.json").unwrap()
    }

    fn write_task(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("test.prp");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_prepare_basic_runner() {
        let temp_dir = TempDir::new().unwrap();
        let task = write_task(&temp_dir, "Test content");
        let runners = runners(
            r#"[{"runner_name":"basic-cli","command_template":["echo","{prompt}"]}]"#,
        );

        let invocation = Invocation::prepare(&task, "basic-cli", &runners).unwrap();

        assert_eq!(invocation.argv, vec!["echo", "Test content"]);
        assert_eq!(invocation.working_dir, temp_dir.path());
        assert_eq!(invocation.prompt, "Test content");
        assert_eq!(invocation.runner, "basic-cli");
        assert_eq!(invocation.program(), "echo");
    }

    #[test]
    fn test_prepare_with_system_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let task = write_task(&temp_dir, "PRP content");
        let runners = runners(
            r#"[{
                "runner_name": "claude-cli",
                "command_template": ["claude", "-p", "{prompt}"],
                "system_prompt_template": "Dir: {working_dir} Plan: {prp_content}"
            }]"#,
        );

        let invocation = Invocation::prepare(&task, "claude-cli", &runners).unwrap();

        let expected = format!("Dir: {} Plan: PRP content", temp_dir.path().display());
        assert_eq!(invocation.argv, vec!["claude", "-p", expected.as_str()]);
    }

    #[test]
    fn test_prepare_without_template_passes_placeholders_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let content = "literal {prompt} {prp_content} {working_dir}";
        let task = write_task(&temp_dir, content);
        let runners = runners(r#"[{"runner_name":"r","command_template":["echo","{prompt}"]}]"#);

        let invocation = Invocation::prepare(&task, "r", &runners).unwrap();

        assert_eq!(invocation.prompt, content);
        assert_eq!(invocation.argv[1], content);
    }

    #[test]
    fn test_prepare_unknown_runner_checked_before_task() {
        let runners = runners(r#"[{"runner_name":"r","command_template":["echo"]}]"#);

        let err = Invocation::prepare(Path::new("does/not/exist.md"), "other", &runners)
            .unwrap_err();

        assert!(matches!(err, RunnerError::UnknownRunner { .. }));
    }

    #[test]
    fn test_prepare_missing_task_file() {
        let temp_dir = TempDir::new().unwrap();
        let runners = runners(r#"[{"runner_name":"r","command_template":["echo"]}]"#);

        let err = Invocation::prepare(&temp_dir.path().join("missing.md"), "r", &runners)
            .unwrap_err();

        assert!(matches!(err, RunnerError::TaskFileNotFound { .. }));
    }

    #[test]
    fn test_prepare_non_utf8_task_file() {
        let temp_dir = TempDir::new().unwrap();
        let task = temp_dir.path().join("binary.prp");
        std::fs::write(&task, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let runners = runners(r#"[{"runner_name":"r","command_template":["echo"]}]"#);

        let err = Invocation::prepare(&task, "r", &runners).unwrap_err();

        assert!(matches!(err, RunnerError::TaskFileUnreadable { .. }));
    }

    #[test]
    fn test_prepare_empty_command_template() {
        let temp_dir = TempDir::new().unwrap();
        let task = write_task(&temp_dir, "x");
        let runners = runners(r#"[{"runner_name":"empty","command_template":[]}]"#);

        let err = Invocation::prepare(&task, "empty", &runners).unwrap_err();

        assert!(matches!(err, RunnerError::EmptyCommand { .. }));
    }

    #[test]
    fn test_prepare_missing_task_reported_before_empty_command() {
        let temp_dir = TempDir::new().unwrap();
        let runners = runners(r#"[{"runner_name":"empty","command_template":[]}]"#);

        let err = Invocation::prepare(&temp_dir.path().join("missing.md"), "empty", &runners)
            .unwrap_err();

        assert!(matches!(err, RunnerError::TaskFileNotFound { .. }));
    }

    #[test]
    fn test_task_dir_of_bare_file_name_is_current_dir() {
        assert_eq!(task_dir(Path::new("plan.md")), PathBuf::from("."));
        assert_eq!(task_dir(Path::new("prps/plan.md")), PathBuf::from("prps"));
    }

    #[test]
    fn test_display_command_quotes_arguments() {
        let invocation = Invocation {
            runner: "r".to_string(),
            argv: vec!["claude".to_string(), "-p".to_string(), "two words".to_string()],
            working_dir: PathBuf::from("."),
            prompt: "two words".to_string(),
        };

        assert_eq!(invocation.display_command(), "claude -p 'two words'");
    }
}
