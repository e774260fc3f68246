//! Schedule analysis
//!
//! Critical-path computation, the proportional schedule-variance
//! estimate, and the resource-leveling shift pass. Every function here is
//! a pure computation over the task slice it is handed; nothing is cached
//! between calls.

use std::collections::BTreeSet;

use chrono::Days;

use super::graph::DependencyGraph;
use super::task::{Priority, Task, TaskId};

/// Result of a critical-path computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriticalPath {
    /// The longest dependency chain, in root-to-sink order
    Path(Vec<TaskId>),

    /// The dependency relation contains a cycle, so no longest path
    /// exists; views should render an empty highlight and may warn
    Indeterminate,
}

impl CriticalPath {
    /// Returns the ids on the path; empty when indeterminate
    pub fn ids(&self) -> BTreeSet<TaskId> {
        match self {
            CriticalPath::Path(chain) => chain.iter().copied().collect(),
            CriticalPath::Indeterminate => BTreeSet::new(),
        }
    }

    /// Returns true when a cycle prevented the computation
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, CriticalPath::Indeterminate)
    }

    /// Sums the durations of the tasks along the path
    pub fn total_duration(&self, tasks: &[Task]) -> u64 {
        match self {
            CriticalPath::Path(chain) => chain
                .iter()
                .map(|&id| u64::from(tasks[id].duration))
                .sum(),
            CriticalPath::Indeterminate => 0,
        }
    }
}

/// Computes the longest dependency chain through the task set.
///
/// Dynamic programming over a topological order: the longest chain
/// ending at a task is its own duration plus the best chain ending at
/// any of its dependencies. Ties between dependencies are broken by
/// whichever comes first; only the chain's total duration is
/// contractual.
pub fn critical_path(tasks: &[Task]) -> CriticalPath {
    if tasks.is_empty() {
        return CriticalPath::Path(Vec::new());
    }

    let graph = DependencyGraph::from_tasks(tasks);
    let Some(order) = graph.topological_order() else {
        return CriticalPath::Indeterminate;
    };

    let mut longest = vec![0u64; tasks.len()];
    let mut best_pred: Vec<Option<TaskId>> = vec![None; tasks.len()];

    for &id in &order {
        let mut best: Option<(TaskId, u64)> = None;
        for &pred in graph.predecessors(id) {
            match best {
                Some((_, len)) if longest[pred] <= len => {}
                _ => best = Some((pred, longest[pred])),
            }
        }
        longest[id] = u64::from(tasks[id].duration) + best.map_or(0, |(_, len)| len);
        best_pred[id] = best.map(|(pred, _)| pred);
    }

    let end = (0..tasks.len())
        .max_by_key(|&id| longest[id])
        .expect("task set is non-empty");

    let mut chain = vec![end];
    let mut cursor = end;
    while let Some(pred) = best_pred[cursor] {
        chain.push(pred);
        cursor = pred;
    }
    chain.reverse();

    CriticalPath::Path(chain)
}

/// Estimates schedule variance in days from the completion ratio.
///
/// The project span runs from the earliest start to the latest end; the
/// estimate assumes progress proportional to the share of completed
/// tasks and reports the earned days, truncated to whole days. This is
/// a coarse heuristic: partial completion and task weighting are
/// ignored.
pub fn schedule_variance(tasks: &[Task]) -> i64 {
    if tasks.is_empty() {
        return 0;
    }

    let planned_end = tasks.iter().map(Task::end_date).max().expect("non-empty");
    let project_start = tasks.iter().map(|t| t.start_date).min().expect("non-empty");
    let span_days = (planned_end - project_start).num_days();

    let completed = tasks.iter().filter(|t| t.status.is_complete()).count();
    let ratio = completed as f64 / tasks.len() as f64;

    (ratio * span_days as f64).floor() as i64
}

/// Shifts every low-priority task forward by one day; returns the number
/// of tasks shifted.
///
/// A placeholder pass, not true resource-constrained leveling: no
/// dependency-aware rescheduling, no capacity check.
pub fn level_resources(tasks: &mut [Task]) -> usize {
    let mut shifted = 0;
    for task in tasks.iter_mut() {
        if task.priority == Priority::Low {
            task.start_date = task.start_date + Days::new(1);
            shifted += 1;
        }
    }
    shifted
}
