//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lootbox/lootbox.toml`
//! 3. Environment variables: `LOOTBOX_*` prefix
//! 4. `--data-dir` CLI override

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Unified configuration for lootbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the catalog CSV files (default: cwd)
    pub data_dir: PathBuf,
    /// Plain item records: `name,weight`
    pub items_file: String,
    /// Container records: `name,weight,capacity`
    pub containers_file: String,
    /// Multi-container records: `name,compartment,...` (optional file)
    pub multi_containers_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            items_file: "items.csv".into(),
            containers_file: "containers.csv".into(),
            multi_containers_file: "multi_containers.csv".into(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence. `data_dir_override` comes
    /// from the CLI and wins over everything else.
    pub fn load(data_dir_override: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("LOOTBOX"));

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(dir) = data_dir_override {
            settings.data_dir = dir.to_path_buf();
        }
        Ok(settings)
    }

    pub fn items_path(&self) -> PathBuf {
        self.data_dir.join(&self.items_file)
    }

    pub fn containers_path(&self) -> PathBuf {
        self.data_dir.join(&self.containers_file)
    }

    pub fn multi_containers_path(&self) -> PathBuf {
        self.data_dir.join(&self.multi_containers_file)
    }

    /// Serialized form for `config show` and the `config init` template.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Get the XDG config directory for lootbox.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lootbox").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lootbox.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_paths_join_data_dir() {
        let settings = Settings::default();

        assert_eq!(settings.items_path(), PathBuf::from("./items.csv"));
        assert_eq!(
            settings.multi_containers_path(),
            PathBuf::from("./multi_containers.csv")
        );
    }

    #[test]
    fn given_settings_then_toml_round_trips() {
        let settings = Settings::default();

        let text = settings.to_toml();
        let parsed: Settings = toml::from_str(&text).unwrap();

        assert_eq!(parsed, settings);
    }
}
