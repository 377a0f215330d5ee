//! Prompt and command construction for runner execution.
//!
//! This module provides:
//!
//! - **Template**: Single-pass placeholder substitution
//! - **Generator**: Final prompt and argv construction for a runner
//!
//! # Placeholders
//!
//! | Placeholder     | Where                    | Replaced with                   |
//! |-----------------|--------------------------|---------------------------------|
//! | `{prp_content}` | `system_prompt_template` | Task file content               |
//! | `{working_dir}` | `system_prompt_template` | Directory containing the task   |
//! | `{prompt}`      | `command_template`       | Final prompt                    |

mod generator;
mod template;

pub use generator::{build_command, generate_prompt};
