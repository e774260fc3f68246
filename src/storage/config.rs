//! Configuration handling
//!
//! Project configuration is stored in `.plan/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display name of the project
    pub name: String,

    /// Duration pre-filled for new tasks when none is given
    pub default_duration: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            default_duration: 5,
        }
    }
}

impl Config {
    /// Loads the configuration for a project root; missing file yields
    /// the defaults
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let path = Self::path_for(project_root);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Writes the configuration to the project's config file
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path_for(project_root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// Returns the config file path for a project root
    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(".plan").join("config.toml")
    }

    /// Walks up from the current directory looking for a `.plan` root
    pub fn find_project_root() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            if dir.join(".plan").is_dir() {
                return Some(dir);
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::for_project(dir.path()).unwrap();

        assert_eq!(config.name, "Untitled Project");
        assert_eq!(config.default_duration, 5);
    }

    #[test]
    fn config_roundtrip() {
        let dir = TempDir::new().unwrap();

        let config = Config {
            name: "Apollo".to_string(),
            default_duration: 3,
        };
        config.save(dir.path()).unwrap();

        let loaded = Config::for_project(dir.path()).unwrap();
        assert_eq!(loaded.name, "Apollo");
        assert_eq!(loaded.default_duration, 3);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let plan_dir = dir.path().join(".plan");
        fs::create_dir_all(&plan_dir).unwrap();
        fs::write(plan_dir.join("config.toml"), "name = \"Solo\"\n").unwrap();

        let config = Config::for_project(dir.path()).unwrap();
        assert_eq!(config.name, "Solo");
        assert_eq!(config.default_duration, 5);
    }
}
