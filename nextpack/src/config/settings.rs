// src/config/settings.rs
use super::CollectorConfig;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SETTINGS_FILE_NAME: &str = "nextpack.toml";

/// Optional overrides read from a `nextpack.toml` file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub extensions: Option<Vec<String>>,
    pub special_files: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub exclude_files: Option<Vec<String>>,
    pub preamble: Option<String>,
    pub output: Option<String>,
}

impl FileSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML, wrong value types or unknown keys.
    #[inline]
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid nextpack settings")
    }

    /// Overlays every present field onto `config`.
    #[inline]
    pub fn apply(self, config: &mut CollectorConfig) {
        if let Some(extensions) = self.extensions {
            config.extensions = extensions;
        }
        if let Some(special_files) = self.special_files {
            config.special_files = special_files;
        }
        if let Some(exclude_dirs) = self.exclude_dirs {
            config.exclude_dirs = exclude_dirs;
        }
        if let Some(exclude_files) = self.exclude_files {
            config.exclude_files = exclude_files;
        }
        if let Some(preamble) = self.preamble {
            config.preamble = preamble;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
    }
}

/// Looks for a `nextpack.toml` in `dir`, then in each parent directory,
/// and loads the first one found.
///
/// # Arguments
///
/// * `dir` - The directory to start searching from
///
/// # Returns
///
/// * `Ok(Some(FileSettings))` when a settings file was found
/// * `Ok(None)` when no directory up to the filesystem root has one
///
/// # Errors
///
/// This function may return an error if:
/// * A settings file exists but cannot be read
/// * The settings file is not valid
#[inline]
pub fn load_settings(dir: &Path) -> Result<Option<FileSettings>> {
    let mut current_dir = dir.to_path_buf();
    let mut visited: HashSet<PathBuf> = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let settings_file = current_dir.join(SETTINGS_FILE_NAME);

        if settings_file.is_file() {
            debug!(path = %settings_file.display(), "loading settings");
            return load_settings_file(&settings_file).map(Some);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(None)
}

/// Loads settings from an explicit file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid.
#[inline]
pub fn load_settings_file(path: &Path) -> Result<FileSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    FileSettings::parse(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}
