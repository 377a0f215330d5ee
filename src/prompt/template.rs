//! Placeholder substitution for prompt and command templates.
//!
//! # Syntax
//!
//! - `{name}` - Replaced with the value of `name` if it is a known variable
//! - Anything else, including unknown `{words}` and stray braces, is copied
//!   through untouched
//!
//! Substitution is a single left-to-right pass over the template. Substituted
//! values are never re-scanned, so a task file that happens to contain
//! `{working_dir}` or `{prompt}` reaches the runner verbatim.

/// Placeholder in a command template for the final prompt.
pub const PROMPT: &str = "prompt";

/// Placeholder in a prompt template for the task file content.
pub const PRP_CONTENT: &str = "prp_content";

/// Placeholder in a prompt template for the task file's directory.
pub const WORKING_DIR: &str = "working_dir";

/// Render a template by replacing every known `{name}` placeholder.
///
/// # Examples
///
/// ```ignore
/// let out = render_template("Dir: {working_dir} Plan: {prp_content}", &[
///     ("working_dir", "/work"),
///     ("prp_content", "ship it"),
/// ]);
/// assert_eq!(out, "Dir: /work Plan: ship it");
/// ```
pub fn render_template(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match lookup(candidate, variables) {
            Some((consumed, value)) => {
                result.push_str(value);
                rest = &candidate[consumed..];
            }
            None => {
                // Not a known placeholder: keep the brace, rescan after it.
                result.push('{');
                rest = &candidate[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Match a known placeholder at the start of `text` (which begins with `{`).
///
/// Returns the byte length of the placeholder and its value.
fn lookup<'v>(text: &str, variables: &[(&str, &'v str)]) -> Option<(usize, &'v str)> {
    let close = text.find('}')?;
    let name = &text[1..close];

    variables
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| (close + 1, *value))
}
