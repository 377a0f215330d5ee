//! Manifest loading and location.

use super::model::{RunnerDefinition, Runners};
use crate::error::{Result, RunnerError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the manifest looked up when none is given explicitly.
pub const DEFAULT_MANIFEST_FILE: &str = "default_runners.json";

/// Load the runner table from a JSON manifest.
///
/// # Errors
///
/// * `ManifestNotFound` - `path` does not exist
/// * `ManifestMalformed` - the file cannot be read, is not valid JSON, is not
///   an array, or an entry lacks `runner_name` / `command_template`
pub fn load_runners(path: &Path) -> Result<Runners> {
    if !path.exists() {
        return Err(RunnerError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| RunnerError::ManifestMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let runners = Runners::from_json(&content, path)?;
    debug!(
        manifest = %path.display(),
        runners = runners.len(),
        "loaded runner manifest"
    );
    Ok(runners)
}

impl Runners {
    /// Parse a manifest from a JSON string.
    ///
    /// `source` is only used for error messages and lookups that report where
    /// the runners came from.
    pub fn from_json(json: &str, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let definitions: Vec<RunnerDefinition> =
            serde_json::from_str(json).map_err(|e| RunnerError::ManifestMalformed {
                path: source.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self::from_definitions(source, definitions))
    }
}

/// Resolve the manifest to use when none was given on the command line.
///
/// Prefers `default_runners.json` next to the executable, falling back to
/// `default_runners.json` in the current directory.
pub fn default_manifest_path() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_MANIFEST_FILE)));

    match beside_exe {
        Some(path) if path.exists() => path,
        _ => PathBuf::from(DEFAULT_MANIFEST_FILE),
    }
}
