//! Project statistics
//!
//! Aggregate counters over the task set, feeding the status overview.

use serde::Serialize;

use super::task::{Status, Task};

/// Aggregate counters for a task set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub on_hold: usize,
    pub milestones: usize,
    pub total_cost: f64,
    /// Total duration in days across non-milestone tasks
    pub total_duration: u64,
    /// Mean duration of non-milestone tasks; 0 when there are none
    pub average_duration: f64,
}

impl ProjectStats {
    pub fn compute(tasks: &[Task]) -> Self {
        let mut stats = ProjectStats {
            total: tasks.len(),
            ..ProjectStats::default()
        };

        let mut span_tasks = 0usize;
        for task in tasks {
            match task.status {
                Status::Completed => stats.completed += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::NotStarted => stats.not_started += 1,
                Status::OnHold => stats.on_hold += 1,
            }
            stats.total_cost += task.cost;
            if task.is_milestone {
                stats.milestones += 1;
            } else {
                stats.total_duration += u64::from(task.duration);
                span_tasks += 1;
            }
        }

        if span_tasks > 0 {
            stats.average_duration = stats.total_duration as f64 / span_tasks as f64;
        }

        stats
    }
}
