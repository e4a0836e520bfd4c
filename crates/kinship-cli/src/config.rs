//! The `~/.kinship/config.toml` file: named trees plus display settings.
//!
//! Every field has a default, so a partial file (or none at all) is valid.
//! `KINSHIP_HOME` replaces `~/.kinship` as the directory holding the config
//! and the REPL history.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const HOME_ENV: &str = "KINSHIP_HOME";
const DEFAULT_TREE: &str = "default";

/// Persistent CLI state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the tree commands operate on
    pub active_tree: String,

    /// Known trees by name
    pub trees: BTreeMap<String, TreeProfile>,

    /// Display and REPL settings
    pub settings: Settings,
}

/// Where one family tree is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeProfile {
    /// Biographical records (JSON array)
    pub info_path: PathBuf,

    /// Relationship topology (JSON object keyed by node id)
    pub relationships_path: PathBuf,
}

impl TreeProfile {
    /// Profile over an explicit pair of documents.
    pub fn new(info_path: impl Into<PathBuf>, relationships_path: impl Into<PathBuf>) -> Self {
        Self {
            info_path: info_path.into(),
            relationships_path: relationships_path.into(),
        }
    }
}

impl Default for TreeProfile {
    /// `family_info.json` and `family_relationships.json` in the working directory.
    fn default() -> Self {
        Self::new("family_info.json", "family_relationships.json")
    }
}

/// Display and REPL settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colour terminal output
    pub color: bool,

    /// Output format used when `--format` is not given
    pub format: OutputFormat,

    /// Lines of REPL history kept
    pub history_size: usize,

    /// Save a changed tree when the REPL exits
    pub autosave: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
            autosave: true,
        }
    }
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered tables
    Table,
    /// Pretty-printed JSON
    Json,
    /// Bare ids, one per line
    Quiet,
}

impl Config {
    /// Directory holding the config file and REPL history.
    pub fn dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(HOME_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".kinship"))
    }

    /// Path of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Read the config file, or defaults if it does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Read a config file at `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file; using defaults");
            return Ok(Self::default());
        }
        let config = toml::from_str(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write this config to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// The profile of the active tree.
    pub fn active_tree(&self) -> Result<&TreeProfile> {
        self.trees
            .get(&self.active_tree)
            .ok_or_else(|| CliError::Config(format!("Tree '{}' not found", self.active_tree)))
    }

    /// Add or replace a tree. Returns the profile it replaced, if any.
    pub fn set_tree(&mut self, name: String, tree: TreeProfile) -> Option<TreeProfile> {
        self.trees.insert(name, tree)
    }

    /// Make `name` the active tree.
    pub fn switch_tree(&mut self, name: String) -> Result<()> {
        if !self.trees.contains_key(&name) {
            return Err(CliError::Config(format!("Tree '{}' does not exist", name)));
        }
        self.active_tree = name;
        Ok(())
    }

    /// Forget a tree. The active tree cannot be removed.
    pub fn remove_tree(&mut self, name: &str) -> Result<Option<TreeProfile>> {
        if name == self.active_tree {
            return Err(CliError::NotPermitted(
                "Cannot delete the active tree".to_string(),
            ));
        }
        Ok(self.trees.remove(name))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_tree: DEFAULT_TREE.to_string(),
            trees: BTreeMap::from([(DEFAULT_TREE.to_string(), TreeProfile::default())]),
            settings: Settings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.active_tree, "default");
        assert_eq!(config.active_tree().unwrap(), &TreeProfile::default());
        assert!(config.settings.color);
        assert!(config.settings.autosave);
    }

    #[test]
    fn test_switch_between_trees() {
        let mut config = Config::default();
        let smiths = TreeProfile::new("/tmp/smiths_info.json", "/tmp/smiths_connections.json");

        assert!(config.set_tree("smiths".to_string(), smiths.clone()).is_none());
        config.switch_tree("smiths".to_string()).unwrap();
        assert_eq!(config.active_tree().unwrap(), &smiths);

        assert!(config.switch_tree("nonexistent".to_string()).is_err());
        assert_eq!(config.active_tree, "smiths");
    }

    #[test]
    fn test_remove_tree() {
        let mut config = Config::default();
        config.set_tree("old".to_string(), TreeProfile::new("a.json", "b.json"));

        assert!(matches!(config.remove_tree("default"), Err(CliError::NotPermitted(_))));
        assert!(config.remove_tree("old").unwrap().is_some());
        assert!(config.remove_tree("old").unwrap().is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            autosave = false
            "#,
        )
        .unwrap();
        assert!(!config.settings.autosave);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.settings.history_size, 1000);
        assert_eq!(config.active_tree, "default");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap().active_tree, "default");

        let mut config = Config::default();
        config.set_tree("smiths".to_string(), TreeProfile::new("s_info.json", "s_rel.json"));
        config.switch_tree("smiths".to_string()).unwrap();
        config.settings.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.active_tree, "smiths");
        assert_eq!(loaded.trees.len(), 2);
        assert_eq!(loaded.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "active_tree = [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));
    }
}
