//! Dependency graph for tasks
//!
//! Builds a directed graph over the registry's id space: one node per
//! task, one edge `dependency -> dependent` per dependency entry. The
//! graph is rebuilt on demand from the current task set and never cached,
//! so it cannot go stale.

use std::collections::VecDeque;

use super::task::{Task, TaskId};

/// A directed dependency graph over positional task ids
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// predecessors[t] lists the tasks t depends on
    predecessors: Vec<Vec<TaskId>>,
    /// successors[t] lists the tasks that depend on t
    successors: Vec<Vec<TaskId>>,
}

impl DependencyGraph {
    /// Builds the graph from the current task set.
    ///
    /// Dependency ids outside the current id range are skipped; the
    /// registry prunes these on delete, so this only matters for data
    /// loaded from an external source.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let count = tasks.len();
        let mut predecessors = vec![Vec::new(); count];
        let mut successors = vec![Vec::new(); count];

        for task in tasks {
            for &dep in &task.dependencies {
                if dep < count {
                    predecessors[task.id].push(dep);
                    successors[dep].push(task.id);
                }
            }
        }

        Self {
            predecessors,
            successors,
        }
    }

    /// Returns the direct dependencies of a task
    pub fn predecessors(&self, id: TaskId) -> &[TaskId] {
        &self.predecessors[id]
    }

    /// Returns the direct dependents of a task
    pub fn successors(&self, id: TaskId) -> &[TaskId] {
        &self.successors[id]
    }

    /// Returns the number of nodes in the graph
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Returns the nodes in topological order (dependencies before
    /// dependents), or `None` when the graph contains a cycle.
    ///
    /// Kahn's algorithm: repeatedly emit a node with no unvisited
    /// predecessors. If any node is never emitted, it sits on a cycle.
    pub fn topological_order(&self) -> Option<Vec<TaskId>> {
        let count = self.len();
        let mut in_degree: Vec<usize> = (0..count).map(|id| self.predecessors[id].len()).collect();

        let mut queue: VecDeque<TaskId> = (0..count).filter(|&id| in_degree[id] == 0).collect();
        let mut order = Vec::with_capacity(count);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for &succ in &self.successors[id] {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    queue.push_back(succ);
                }
            }
        }

        if order.len() == count {
            Some(order)
        } else {
            None
        }
    }

    /// Returns true if the dependency relation contains a cycle
    pub fn has_cycle(&self) -> bool {
        self.topological_order().is_none()
    }
}
