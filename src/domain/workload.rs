//! Resource workload aggregation
//!
//! Sums assigned task durations per named resource. Resources with no
//! assigned work are still reported so consumers can render an empty
//! allocation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::task::Task;

/// Total allocated days per resource, plus the unassigned bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkloadReport {
    /// Days allocated to each known resource; zero entries included
    pub per_resource: BTreeMap<String, u64>,

    /// Days on tasks with no (or an unknown) resource assignment
    pub unassigned: u64,
}

/// Aggregates task durations against the known resource names.
///
/// A task whose `assigned_to` is empty or does not match any known
/// resource counts toward the unassigned bucket. Milestones contribute
/// zero days but still land in their resource's entry.
pub fn aggregate_workload(tasks: &[Task], resources: &[String]) -> WorkloadReport {
    let mut report = WorkloadReport {
        per_resource: resources.iter().map(|r| (r.clone(), 0)).collect(),
        unassigned: 0,
    };

    for task in tasks {
        let days = u64::from(task.duration);
        match report.per_resource.get_mut(&task.assigned_to) {
            Some(total) => *total += days,
            None => report.unassigned += days,
        }
    }

    report
}
