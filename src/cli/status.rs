//! Project status overview

use anyhow::Result;

use super::output::Output;
use crate::domain::{schedule_variance, ProjectStats, TaskRegistry};
use crate::storage::Project;

pub fn show_status(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let registry = TaskRegistry::from_tasks(project.task_store().read_all()?);

    let stats = ProjectStats::compute(registry.tasks());
    let variance = schedule_variance(registry.tasks());

    if output.is_json() {
        output.data(&serde_json::json!({
            "name": project.config().name,
            "stats": stats,
            "variance_days": variance,
        }));
        return Ok(());
    }

    println!("Project: {}", project.config().name);
    println!();
    println!("Tasks:       {}", stats.total);
    println!("  completed:   {}", stats.completed);
    println!("  in progress: {}", stats.in_progress);
    println!("  not started: {}", stats.not_started);
    println!("  on hold:     {}", stats.on_hold);
    println!("Milestones:  {}", stats.milestones);
    println!("Variance:    {} days", variance);
    println!("Total cost:  {:.2}", stats.total_cost);
    if stats.total > 0 {
        println!(
            "Duration:    {} days total, {:.1} average",
            stats.total_duration, stats.average_duration
        );
    }

    Ok(())
}
