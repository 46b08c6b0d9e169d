// ABOUTME: Settings file discovery and loading for docktree.yml.
// ABOUTME: Sections stay untyped so the settings validator does all shape checking.

use crate::error::{Error, Result};
use crate::resource::ResourceKind;
use crate::settings::{
    DESCRIPTION_FIELD, GROUP_BY_FIELD, LABEL_FIELD, SORT_BY_FIELD, TreeSettings,
};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "docktree.yml";
pub const CONFIG_FILENAME_ALT: &str = "docktree.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".docktree/config.yml";

/// Raw per-kind view settings, as written by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub containers: Value,

    #[serde(default)]
    pub images: Value,

    #[serde(default)]
    pub volumes: Value,

    #[serde(default)]
    pub networks: Value,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid "use the defaults everywhere".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings file");
        Ok(config)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`Config::discover`], but a directory without a settings file
    /// yields the defaults.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => {
                tracing::debug!(dir = %dir.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// The untyped section for one kind; `Value::Null` when absent.
    pub fn settings_for(&self, kind: ResourceKind) -> &Value {
        match kind {
            ResourceKind::Containers => &self.containers,
            ResourceKind::Images => &self.images,
            ResourceKind::Volumes => &self.volumes,
            ResourceKind::Networks => &self.networks,
        }
    }
}

/// Write a settings file spelling out every kind's defaults.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, generate_template_yaml())?;
    Ok(config_path)
}

fn generate_template_yaml() -> String {
    let mut yaml = String::new();
    for kind in ResourceKind::ALL {
        let defaults = TreeSettings::defaults(kind.adapter());
        let description = defaults
            .description_keys
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let group_by = defaults
            .group_by_key
            .map(|k| k.as_str())
            .unwrap_or("None");

        // Writing to a String cannot fail.
        let _ = write!(
            yaml,
            "{kind}:\n  {LABEL_FIELD}: {}\n  {DESCRIPTION_FIELD}: [{description}]\n  {GROUP_BY_FIELD}: {group_by}\n  {SORT_BY_FIELD}: {}\n",
            defaults.label_key, defaults.sort_by_key,
        );
    }
    yaml
}
