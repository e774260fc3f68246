//! Task registry
//!
//! Owns the ordered task collection. Ids are positional: a task's id is
//! its index in the registry, so deleting a task renumbers everything
//! after it. All mutations validate their input before touching state.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

use super::task::{Priority, Status, Task, TaskId};

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Task name cannot be empty")]
    EmptyName,

    #[error("Cost cannot be negative: {0}")]
    NegativeCost(f64),

    #[error("Unknown dependency id: {0}")]
    UnknownDependency(TaskId),

    #[error("Task {0} cannot depend on itself")]
    SelfDependency(TaskId),
}

/// Field set for creating a new task
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub name: String,
    pub start_date: NaiveDate,
    pub duration: u32,
    pub is_milestone: bool,
    pub assigned_to: String,
    pub priority: Priority,
    pub status: Status,
    pub dependencies: BTreeSet<TaskId>,
    pub cost: f64,
}

impl TaskDraft {
    /// Creates a draft with the given name and start date and default
    /// values for everything else
    pub fn new(name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start_date,
            duration: 0,
            is_milestone: false,
            assigned_to: String::new(),
            priority: Priority::default(),
            status: Status::default(),
            dependencies: BTreeSet::new(),
            cost: 0.0,
        }
    }
}

/// Partial field set for editing an existing task; `None` leaves the
/// field unchanged
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub duration: Option<u32>,
    pub is_milestone: Option<bool>,
    pub assigned_to: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub dependencies: Option<BTreeSet<TaskId>>,
    pub cost: Option<f64>,
}

/// The ordered task collection with positional ids
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds a registry from loaded tasks, reassigning positional ids
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut registry = Self { tasks };
        for (idx, task) in registry.tasks.iter_mut().enumerate() {
            task.id = idx;
        }
        registry
    }

    /// Adds a task, assigning it the next positional id
    pub fn add(&mut self, draft: TaskDraft) -> Result<TaskId, RegistryError> {
        let id = self.tasks.len();
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if draft.cost < 0.0 {
            return Err(RegistryError::NegativeCost(draft.cost));
        }
        for &dep in &draft.dependencies {
            if dep >= id {
                return Err(RegistryError::UnknownDependency(dep));
            }
        }

        // Milestones are point events: duration collapses to zero.
        let duration = if draft.is_milestone { 0 } else { draft.duration };

        self.tasks.push(Task {
            id,
            name,
            start_date: draft.start_date,
            duration,
            is_milestone: draft.is_milestone,
            assigned_to: draft.assigned_to,
            priority: draft.priority,
            status: draft.status,
            dependencies: draft.dependencies,
            cost: draft.cost,
        });

        Ok(id)
    }

    /// Applies a patch to an existing task under the same validation as
    /// `add`; the task is untouched when validation fails
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<(), RegistryError> {
        if id >= self.tasks.len() {
            return Err(RegistryError::NotFound(id));
        }

        let mut updated = self.tasks[id].clone();
        if let Some(name) = patch.name {
            updated.name = name.trim().to_string();
        }
        if let Some(start_date) = patch.start_date {
            updated.start_date = start_date;
        }
        if let Some(duration) = patch.duration {
            updated.duration = duration;
        }
        if let Some(is_milestone) = patch.is_milestone {
            updated.is_milestone = is_milestone;
        }
        if let Some(assigned_to) = patch.assigned_to {
            updated.assigned_to = assigned_to;
        }
        if let Some(priority) = patch.priority {
            updated.priority = priority;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(dependencies) = patch.dependencies {
            updated.dependencies = dependencies;
        }
        if let Some(cost) = patch.cost {
            updated.cost = cost;
        }

        if updated.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if updated.cost < 0.0 {
            return Err(RegistryError::NegativeCost(updated.cost));
        }
        for &dep in &updated.dependencies {
            if dep == id {
                return Err(RegistryError::SelfDependency(id));
            }
            if dep >= self.tasks.len() {
                return Err(RegistryError::UnknownDependency(dep));
            }
        }
        if updated.is_milestone {
            updated.duration = 0;
        }

        self.tasks[id] = updated;
        Ok(())
    }

    /// Deletes a task, renumbering the tasks after it.
    ///
    /// Remaining tasks drop dependency ids at or beyond the new task
    /// count. In-range ids are kept as-is, even though the renumbering
    /// may have repointed them at a different task.
    pub fn delete(&mut self, id: TaskId) -> Result<(), RegistryError> {
        if id >= self.tasks.len() {
            return Err(RegistryError::NotFound(id));
        }

        self.tasks.remove(id);

        let count = self.tasks.len();
        for (idx, task) in self.tasks.iter_mut().enumerate() {
            task.id = idx;
            task.dependencies.retain(|&dep| dep < count);
        }

        Ok(())
    }

    /// Returns the task with the given id, if present
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Returns all tasks in id order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns a mutable view of all tasks, for in-place passes such as
    /// resource leveling
    pub fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    /// Consumes the registry, returning the owned task list
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Returns the number of tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the registry holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
