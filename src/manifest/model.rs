//! Runner definition and the name-keyed runner table.

use crate::error::{Result, RunnerError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A single backend runner as declared in the manifest.
///
/// Unknown keys on a manifest entry are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunnerDefinition {
    /// Unique key used to select the runner on the command line.
    #[serde(rename = "runner_name")]
    pub name: String,

    /// Argument vector; every `{prompt}` is replaced with the final prompt.
    pub command_template: Vec<String>,

    /// Optional wrapper around the task content.
    ///
    /// Supports `{prp_content}` and `{working_dir}`.
    #[serde(default)]
    pub system_prompt_template: Option<String>,
}

impl RunnerDefinition {
    /// The prompt template, if one is set and non-empty.
    pub fn prompt_template(&self) -> Option<&str> {
        self.system_prompt_template
            .as_deref()
            .filter(|template| !template.is_empty())
    }
}

/// Runner definitions keyed by name, along with the manifest they came from.
#[derive(Debug, Clone, Default)]
pub struct Runners {
    source: PathBuf,
    by_name: BTreeMap<String, RunnerDefinition>,
}

impl Runners {
    /// Build the table from definitions in manifest order.
    ///
    /// A later definition with the same name replaces the earlier one.
    pub fn from_definitions<I>(source: impl Into<PathBuf>, definitions: I) -> Self
    where
        I: IntoIterator<Item = RunnerDefinition>,
    {
        let mut by_name = BTreeMap::new();
        for definition in definitions {
            by_name.insert(definition.name.clone(), definition);
        }
        Self {
            source: source.into(),
            by_name,
        }
    }

    /// Path of the manifest these runners were loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn get(&self, name: &str) -> Option<&RunnerDefinition> {
        self.by_name.get(name)
    }

    /// Look up a runner, failing with `UnknownRunner` if it is not defined.
    pub fn require(&self, name: &str) -> Result<&RunnerDefinition> {
        self.get(name).ok_or_else(|| RunnerError::UnknownRunner {
            runner: name.to_string(),
            manifest: self.source.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over runners sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &RunnerDefinition> {
        self.by_name.values()
    }
}
