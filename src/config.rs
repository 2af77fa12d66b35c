//! Configuration handling for theme-builder.
//! The builder manifest is optional; every field falls back to the layout of
//! the stock theme template.

use crate::constants::{
    CONFIG_FILES, DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS, DEFAULT_INCLUDE_MARKER,
    DEFAULT_INCLUDE_TEMPLATE, DEFAULT_INSTANCE_SUFFIX, DEFAULT_PROTOTYPE, DEFAULT_README,
    DEFAULT_STYLESHEET,
};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings of a builder run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Extensions of the files scanned by substitutions
    pub extensions: Vec<String>,
    /// Path fragments excluded from substitutions (case-insensitive)
    pub exclude: Vec<String>,
    /// Document displayed by the welcome step
    pub readme: PathBuf,
    /// Compiled stylesheet emptied when SASS is declined
    pub stylesheet: PathBuf,
    pub post_types: PostTypeConfig,
}

/// Settings of the repeatable post type generation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostTypeConfig {
    /// File cloned once per post type
    pub prototype: PathBuf,
    /// Appended to the post type name to form the generated file name
    pub file_suffix: String,
    /// Token replaced by the include directives of the generated files
    pub include_marker: String,
    /// Directive rendered for each generated file, `path` and `index` are available
    pub include_template: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            exclude: DEFAULT_EXCLUDES.iter().map(|e| e.to_string()).collect(),
            readme: PathBuf::from(DEFAULT_README),
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET),
            post_types: PostTypeConfig::default(),
        }
    }
}

impl Default for PostTypeConfig {
    fn default() -> Self {
        Self {
            prototype: PathBuf::from(DEFAULT_PROTOTYPE),
            file_suffix: DEFAULT_INSTANCE_SUFFIX.to_string(),
            include_marker: DEFAULT_INCLUDE_MARKER.to_string(),
            include_template: DEFAULT_INCLUDE_TEMPLATE.to_string(),
        }
    }
}

/// Finds the builder manifest in `root`, trying each name of `config_files` in order.
pub fn find_config<P: AsRef<Path>>(root: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files
        .iter()
        .map(|file| root.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Parses manifest content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the manifest schema
pub fn parse_config(content: &str) -> Result<BuilderConfig> {
    if content.trim().is_empty() {
        return Ok(BuilderConfig::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the builder manifest of `root`.
///
/// # Returns
/// * The parsed configuration and the manifest path, or the defaults and
///   `None` when the project has no manifest
pub fn load_config<P: AsRef<Path>>(root: P) -> Result<(BuilderConfig, Option<PathBuf>)> {
    match find_config(&root, &CONFIG_FILES) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(Error::file(&path))?;
            Ok((parse_config(&content)?, Some(path)))
        }
        None => {
            debug!("No builder manifest found, using defaults");
            Ok((BuilderConfig::default(), None))
        }
    }
}
