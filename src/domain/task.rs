//! Task domain model
//!
//! Tasks are the scheduled units of work within a project. They carry a
//! start date, a duration in calendar days, dependencies on other tasks,
//! an optional resource assignment, and a cost.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("Unrecognized {kind}: {value}")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

/// Positional task identifier, dense and contiguous within the registry.
///
/// Ids equal the task's index in the registry and are reassigned whenever
/// the registry shrinks.
pub type TaskId = usize;

/// Priority of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Returns a display label for the priority
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(ParseLabelError {
                kind: "priority",
                value: s.to_string(),
            }),
        }
    }
}

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    OnHold,
}

impl FromStr for Status {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "not_started" => Ok(Status::NotStarted),
            "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "on_hold" => Ok(Status::OnHold),
            _ => Err(ParseLabelError {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}

impl Status {
    /// Returns true if this status represents completion
    pub fn is_complete(&self) -> bool {
        matches!(self, Status::Completed)
    }

    /// Returns true if this task is currently being worked on
    pub fn is_active(&self) -> bool {
        matches!(self, Status::InProgress)
    }

    /// Returns a display label for the status
    pub fn label(&self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::OnHold => "on_hold",
        }
    }
}

/// A scheduled task within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Positional id within the registry
    pub id: TaskId,

    /// Human-readable name
    pub name: String,

    /// Calendar date the task begins
    pub start_date: NaiveDate,

    /// Duration in calendar days; always 0 for milestones
    pub duration: u32,

    /// Milestones are point-in-time events rather than spans of work
    #[serde(default)]
    pub is_milestone: bool,

    /// Resource name this task is assigned to; empty means unassigned
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assigned_to: String,

    /// Scheduling priority
    #[serde(default)]
    pub priority: Priority,

    /// Current status
    #[serde(default)]
    pub status: Status,

    /// Ids of tasks that must complete before this one
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub dependencies: BTreeSet<TaskId>,

    /// Monetary cost of the task
    #[serde(default)]
    pub cost: f64,
}

impl Task {
    /// Returns the date the task ends: `start_date` plus `duration` days
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Days::new(u64::from(self.duration))
    }

    /// Returns true if the task has no resource assignment
    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_empty()
    }
}
