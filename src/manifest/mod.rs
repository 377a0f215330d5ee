//! Runner manifest for prp-runner.
//!
//! The manifest is a JSON array of runner definitions, each naming a backend
//! CLI and the argv template used to invoke it:
//!
//! ```json
//! [
//!   {
//!     "runner_name": "claude-cli",
//!     "command_template": ["claude", "-p", "{prompt}"],
//!     "system_prompt_template": "Working in {working_dir}.\n\n{prp_content}"
//!   }
//! ]
//! ```
//!
//! The manifest is read fresh on every invocation and passed around as a
//! [`Runners`] value; nothing is cached between runs.

mod model;
mod operations;


pub use model::{RunnerDefinition, Runners};
pub use operations::{default_manifest_path, load_runners};
