//! Baseline snapshots
//!
//! A baseline is a deep copy of the task set captured at a point in
//! time, used for planned-vs-actual comparison. Baselines are never
//! mutated after capture and persist for the lifetime of the project;
//! only the most recent one drives comparison views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::task::Task;

#[derive(Debug, Error, PartialEq)]
pub enum BaselineError {
    #[error("No tasks to baseline")]
    EmptyTaskSet,
}

/// An immutable snapshot of the task set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// When the snapshot was captured
    pub created_at: DateTime<Utc>,

    tasks: Vec<Task>,
}

impl Baseline {
    /// Read-only view of the captured tasks
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the snapshot
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the snapshot holds no tasks; cannot occur for
    /// baselines captured through the manager
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Ordered history of captured baselines
#[derive(Debug, Clone, Default)]
pub struct BaselineManager {
    baselines: Vec<Baseline>,
}

impl BaselineManager {
    /// Creates an empty history
    pub fn new() -> Self {
        Self {
            baselines: Vec::new(),
        }
    }

    /// Restores a history from loaded baselines
    pub fn from_baselines(baselines: Vec<Baseline>) -> Self {
        Self { baselines }
    }

    /// Deep-copies the task set into a new baseline and appends it to
    /// the history; an empty task set is rejected
    pub fn capture(&mut self, tasks: &[Task]) -> Result<&Baseline, BaselineError> {
        if tasks.is_empty() {
            return Err(BaselineError::EmptyTaskSet);
        }

        self.baselines.push(Baseline {
            created_at: Utc::now(),
            tasks: tasks.to_vec(),
        });

        Ok(self.baselines.last().expect("just pushed"))
    }

    /// Returns the most recent baseline, if any exists
    pub fn latest(&self) -> Option<&Baseline> {
        self.baselines.last()
    }

    /// Returns all baselines, oldest first
    pub fn all(&self) -> &[Baseline] {
        &self.baselines
    }

    /// Consumes the manager, returning the owned history
    pub fn into_baselines(self) -> Vec<Baseline> {
        self.baselines
    }

    /// Number of captured baselines
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    /// Returns true if no baseline has been captured
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}
