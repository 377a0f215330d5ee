//! Implementation of `prp-runner --list-runners`.

use crate::error::{Result, RunnerError};
use crate::manifest::Runners;
use std::io::Write;

/// Print every runner in the manifest with its command template.
pub fn cmd_list(runners: &Runners, out: &mut dyn Write) -> Result<()> {
    write_listing(runners, out).map_err(|e| RunnerError::io("failed to print runners", e))
}

fn write_listing(runners: &Runners, out: &mut dyn Write) -> std::io::Result<()> {
    if runners.is_empty() {
        writeln!(out, "No runners configured in {}.", runners.source().display())?;
        return Ok(());
    }

    writeln!(
        out,
        "Configured runners ({}) in {}:",
        runners.len(),
        runners.source().display()
    )?;
    writeln!(out)?;

    for runner in runners.iter() {
        let prompt = if runner.prompt_template().is_some() {
            "system prompt template"
        } else {
            "raw PRP content"
        };

        writeln!(out, "  {}", runner.name)?;
        writeln!(
            out,
            "    Command:     {}",
            shell_words::join(&runner.command_template)
        )?;
        writeln!(out, "    Prompt:      {}", prompt)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_runners() {
        let runners = Runners::from_json(
            r#"[
                {"runner_name": "claude-cli", "command_template": ["claude", "-p", "{prompt}"],
                 "system_prompt_template": "System: {prp_content}"},
                {"runner_name": "basic-cli", "command_template": ["echo", "{prompt}"]}
            ]"#,
            "runners.json",
        )
        .unwrap();

        let mut out = Vec::new();
        cmd_list(&runners, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("Configured runners (2) in runners.json:"));
        assert!(out.contains("  basic-cli\n    Command:     echo "));
        assert!(out.contains("{prompt}"));
        assert!(out.contains("    Prompt:      system prompt template"));
        assert!(out.contains("    Prompt:      raw PRP content"));
        // Sorted by name
        assert!(out.find("basic-cli").unwrap() < out.find("claude-cli").unwrap());
    }

    #[test]
    fn test_list_empty_manifest() {
        let runners = Runners::from_json("[]", "runners.json").unwrap();

        let mut out = Vec::new();
        cmd_list(&runners, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No runners configured in runners.json.\n"
        );
    }
}
