//! Final prompt and argv construction for a runner.

use super::template::{PRP_CONTENT, PROMPT, WORKING_DIR, render_template};
use crate::manifest::RunnerDefinition;

/// Build the final prompt for a runner.
///
/// With a prompt template, `{prp_content}` and `{working_dir}` are filled in.
/// Without one, the task content is the prompt, verbatim.
pub fn generate_prompt(runner: &RunnerDefinition, task_content: &str, working_dir: &str) -> String {
    match runner.prompt_template() {
        Some(template) => render_template(
            template,
            &[(PRP_CONTENT, task_content), (WORKING_DIR, working_dir)],
        ),
        None => task_content.to_string(),
    }
}

/// Build the argv for a runner by replacing `{prompt}` in every argument.
pub fn build_command(runner: &RunnerDefinition, prompt: &str) -> Vec<String> {
    runner
        .command_template
        .iter()
        .map(|arg| render_template(arg, &[(PROMPT, prompt)]))
        .collect()
}
