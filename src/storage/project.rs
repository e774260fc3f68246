//! Project management
//!
//! Handles project initialization and provides access to the stores.
//! The engine itself never touches disk; commands load state through a
//! `Project`, mutate in memory, and write back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{BaselineStore, Config, ResourceStore, TaskStore};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not in a plan project. Run 'plan init' first.")]
    NotInProject,
}

/// A plan project rooted at a directory containing `.plan/`
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens an existing project at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.join(".plan").is_dir() {
            return Err(ProjectError::NotInProject.into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(ProjectError::NotInProject)?;
        Self::open(root)
    }

    /// Initializes a new project at the given path
    pub fn init(root: impl Into<PathBuf>, name: Option<&str>) -> Result<Self> {
        let root = root.into();
        let plan_dir = root.join(".plan");

        fs::create_dir_all(&plan_dir)
            .with_context(|| format!("Failed to create .plan directory: {}", plan_dir.display()))?;

        if !Config::path_for(&root).exists() {
            let config = Config {
                name: name.map(str::to_string).unwrap_or_else(|| {
                    root.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| Config::default().name)
                }),
                ..Config::default()
            };
            config.save(&root)?;
        }

        Self::open(root)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .plan directory path
    pub fn plan_dir(&self) -> PathBuf {
        self.root.join(".plan")
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the task store
    pub fn task_store(&self) -> TaskStore {
        TaskStore::for_project(&self.root)
    }

    /// Returns the resource store
    pub fn resource_store(&self) -> ResourceStore {
        ResourceStore::for_project(&self.root)
    }

    /// Returns the baseline store
    pub fn baseline_store(&self) -> BaselineStore {
        BaselineStore::for_project(&self.root)
    }
}
