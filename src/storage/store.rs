//! JSON file stores
//!
//! Tasks, resources, and baselines each live in their own pretty-printed
//! JSON file under `.plan/`. Reads take a shared file lock, writes go to
//! a temp file under an exclusive lock and are renamed into place.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{Baseline, Task};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open store: {}", path.display()))?;

    // Shared lock for reading; released when the file is dropped
    file.lock_shared()
        .with_context(|| format!("Failed to lock store for reading: {}", path.display()))?;

    let reader = BufReader::new(&file);
    let value = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse store: {}", path.display()))?;

    Ok(Some(value))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("json.tmp");

    {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.lock_exclusive()
            .with_context(|| format!("Failed to lock store for writing: {}", path.display()))?;

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, value)
            .with_context(|| format!("Failed to serialize store: {}", path.display()))?;
        writeln!(writer).context("Failed to terminate store file")?;
        writer.flush().context("Failed to flush store file")?;
    }

    // Atomic rename
    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

/// Store for the task list
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store for a project
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(".plan").join("tasks.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all tasks; a missing file is an empty project
    pub fn read_all(&self) -> Result<Vec<Task>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    /// Writes the full task list (full rewrite)
    pub fn write_all(&self, tasks: &[Task]) -> Result<()> {
        write_json(&self.path, &tasks)
    }
}

/// Store for the resource name list
pub struct ResourceStore {
    path: PathBuf,
}

impl ResourceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(".plan").join("resources.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_all(&self) -> Result<Vec<String>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    pub fn write_all(&self, resources: &[String]) -> Result<()> {
        write_json(&self.path, &resources)
    }
}

/// Store for the baseline history
pub struct BaselineStore {
    path: PathBuf,
}

impl BaselineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(".plan").join("baselines.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_all(&self) -> Result<Vec<Baseline>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    pub fn write_all(&self, baselines: &[Baseline]) -> Result<()> {
        write_json(&self.path, &baselines)
    }
}
