//! Schedule analysis CLI commands
//!
//! Critical path, workload, variance, and the leveling pass. Each
//! command recomputes from the stored task set.

use anyhow::Result;

use super::output::Output;
use crate::domain::{
    aggregate_workload, critical_path, level_resources, schedule_variance, CriticalPath,
    TaskRegistry,
};
use crate::storage::Project;

pub fn show_critical_path(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    // Re-id on load, as every command does: positional ids must match
    // the slice the analyzer walks.
    let registry = TaskRegistry::from_tasks(project.task_store().read_all()?);
    let tasks = registry.tasks();

    let path = critical_path(tasks);

    if path.is_indeterminate() {
        output.warn("Dependency cycle detected; critical path is indeterminate");
    }

    if output.is_json() {
        let chain = match &path {
            CriticalPath::Path(chain) => chain.clone(),
            CriticalPath::Indeterminate => Vec::new(),
        };
        output.data(&serde_json::json!({
            "path": chain,
            "total_days": path.total_duration(tasks),
            "indeterminate": path.is_indeterminate(),
        }));
        return Ok(());
    }

    match &path {
        CriticalPath::Indeterminate => println!("Critical path: indeterminate"),
        CriticalPath::Path(chain) if chain.is_empty() => println!("No tasks"),
        CriticalPath::Path(chain) => {
            println!("Critical path ({} days):", path.total_duration(tasks));
            for &id in chain {
                let task = &tasks[id];
                println!("  {} {} ({} days)", id, task.name, task.duration);
            }
        }
    }

    Ok(())
}

pub fn show_workload(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let registry = TaskRegistry::from_tasks(project.task_store().read_all()?);
    let resources = project.resource_store().read_all()?;

    let report = aggregate_workload(registry.tasks(), &resources);

    if output.is_json() {
        output.data(&report);
    } else if report.per_resource.is_empty() && report.unassigned == 0 {
        println!("No workload data");
    } else {
        println!("{:<16} DAYS", "RESOURCE");
        println!("{}", "-".repeat(24));
        for (resource, days) in &report.per_resource {
            println!("{:<16} {}", resource, days);
        }
        if report.unassigned > 0 {
            println!("{:<16} {}", "(unassigned)", report.unassigned);
        }
    }

    Ok(())
}

pub fn show_variance(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let registry = TaskRegistry::from_tasks(project.task_store().read_all()?);

    let variance = schedule_variance(registry.tasks());

    if output.is_json() {
        output.data(&serde_json::json!({ "variance_days": variance }));
    } else {
        println!("Schedule variance: {} days", variance);
    }

    Ok(())
}

pub fn run_leveling(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let store = project.task_store();
    let mut registry = TaskRegistry::from_tasks(store.read_all()?);

    let shifted = level_resources(registry.tasks_mut());
    store.write_all(registry.tasks())?;

    if output.is_json() {
        output.data(&serde_json::json!({ "shifted": shifted }));
    } else {
        output.success(&format!(
            "Leveling shifted {} low-priority task(s) by one day",
            shifted
        ));
    }

    Ok(())
}
