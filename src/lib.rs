//! Plan CLI - Local-first project scheduling
//!
//! Plan tracks a single project's tasks with start dates, durations,
//! dependencies, and costs, and derives schedule-health metrics from
//! them: the critical path through the dependency graph, a proportional
//! schedule-variance estimate, and per-resource workload. Baselines
//! capture immutable snapshots for planned-vs-actual comparison.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Baseline, CriticalPath, Priority, Status, Task, TaskId, TaskRegistry};
