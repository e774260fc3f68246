//! Task CLI commands

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Subcommand;

use super::output::Output;
use crate::domain::{Priority, Status, Task, TaskDraft, TaskId, TaskPatch, TaskRegistry};
use crate::storage::Project;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    Add {
        /// Task name
        name: String,

        /// Start date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Duration in days (defaults to the configured default)
        #[arg(long)]
        duration: Option<u32>,

        /// Mark as a milestone (forces zero duration)
        #[arg(long)]
        milestone: bool,

        /// Cost of the task
        #[arg(long, default_value_t = 0.0)]
        cost: f64,

        /// Resource the task is assigned to
        #[arg(long)]
        assign: Option<String>,

        /// Priority: low, medium, high, critical
        #[arg(long)]
        priority: Option<Priority>,

        /// Status: not_started, in_progress, completed, on_hold
        #[arg(long)]
        status: Option<Status>,

        /// Comma-separated ids of tasks this one depends on
        #[arg(long)]
        deps: Option<String>,
    },

    /// Edit an existing task; omitted flags leave fields unchanged
    Edit {
        /// Task id
        id: TaskId,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// New duration in days
        #[arg(long)]
        duration: Option<u32>,

        /// Change the milestone flag
        #[arg(long)]
        milestone: Option<bool>,

        /// New cost
        #[arg(long)]
        cost: Option<f64>,

        /// New resource assignment (empty string to unassign)
        #[arg(long)]
        assign: Option<String>,

        /// New priority
        #[arg(long)]
        priority: Option<Priority>,

        /// New status
        #[arg(long)]
        status: Option<Status>,

        /// Replacement dependency ids, comma-separated (empty string to
        /// clear)
        #[arg(long)]
        deps: Option<String>,
    },

    /// Delete a task, renumbering the tasks after it
    Rm {
        /// Task id
        id: TaskId,
    },

    /// List all tasks
    List,

    /// Show task details
    Show {
        /// Task id
        id: TaskId,
    },
}

pub fn run(cmd: TaskCommands, output: &Output) -> Result<()> {
    match cmd {
        TaskCommands::Add {
            name,
            start,
            duration,
            milestone,
            cost,
            assign,
            priority,
            status,
            deps,
        } => add_task(
            output, name, start, duration, milestone, cost, assign, priority, status, deps,
        ),
        TaskCommands::Edit {
            id,
            name,
            start,
            duration,
            milestone,
            cost,
            assign,
            priority,
            status,
            deps,
        } => edit_task(
            output, id, name, start, duration, milestone, cost, assign, priority, status, deps,
        ),
        TaskCommands::Rm { id } => delete_task(output, id),
        TaskCommands::List => list_tasks(output),
        TaskCommands::Show { id } => show_task(output, id),
    }
}

/// Parses a comma-separated id list; an empty string is an empty set
fn parse_deps(input: &str) -> Result<BTreeSet<TaskId>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<TaskId>()
                .with_context(|| format!("Invalid dependency id: {}", part))
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn add_task(
    output: &Output,
    name: String,
    start: Option<NaiveDate>,
    duration: Option<u32>,
    milestone: bool,
    cost: f64,
    assign: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
    deps: Option<String>,
) -> Result<()> {
    let project = Project::open_current()?;
    let store = project.task_store();
    let mut registry = TaskRegistry::from_tasks(store.read_all()?);

    let draft = TaskDraft {
        duration: duration.unwrap_or(project.config().default_duration),
        is_milestone: milestone,
        assigned_to: assign.unwrap_or_default(),
        priority: priority.unwrap_or_default(),
        status: status.unwrap_or_default(),
        dependencies: deps.as_deref().map(parse_deps).transpose()?.unwrap_or_default(),
        cost,
        ..TaskDraft::new(name, start.unwrap_or_else(|| Local::now().date_naive()))
    };

    let id = registry.add(draft)?;
    store.write_all(registry.tasks())?;

    let task = registry.get(id).expect("just added");
    if output.is_json() {
        output.data(task);
    } else {
        output.success(&format!("Added task {}: {}", id, task.name));
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn edit_task(
    output: &Output,
    id: TaskId,
    name: Option<String>,
    start: Option<NaiveDate>,
    duration: Option<u32>,
    milestone: Option<bool>,
    cost: Option<f64>,
    assign: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
    deps: Option<String>,
) -> Result<()> {
    let project = Project::open_current()?;
    let store = project.task_store();
    let mut registry = TaskRegistry::from_tasks(store.read_all()?);

    let patch = TaskPatch {
        name,
        start_date: start,
        duration,
        is_milestone: milestone,
        assigned_to: assign,
        priority,
        status,
        dependencies: deps.as_deref().map(parse_deps).transpose()?,
        cost,
    };

    registry.update(id, patch)?;
    store.write_all(registry.tasks())?;

    let task = registry.get(id).expect("just updated");
    if output.is_json() {
        output.data(task);
    } else {
        output.success(&format!("Updated task {}: {}", id, task.name));
    }

    Ok(())
}

fn delete_task(output: &Output, id: TaskId) -> Result<()> {
    let project = Project::open_current()?;
    let store = project.task_store();
    let mut registry = TaskRegistry::from_tasks(store.read_all()?);

    registry.delete(id)?;
    store.write_all(registry.tasks())?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": id,
            "remaining": registry.len(),
        }));
    } else {
        output.success(&format!(
            "Deleted task {} ({} tasks remain)",
            id,
            registry.len()
        ));
    }

    Ok(())
}

fn list_tasks(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let registry = TaskRegistry::from_tasks(project.task_store().read_all()?);
    let tasks = registry.tasks();

    if output.is_json() {
        output.data(&tasks);
    } else if tasks.is_empty() {
        println!("No tasks");
    } else {
        println!(
            "{:<4} {:<12} {:<10} {:<12} {:>5} {:<12} NAME",
            "ID", "STATUS", "PRIORITY", "START", "DAYS", "ASSIGNED"
        );
        println!("{}", "-".repeat(70));

        for task in tasks {
            let days = if task.is_milestone {
                "mile".to_string()
            } else {
                task.duration.to_string()
            };
            println!(
                "{:<4} {:<12} {:<10} {:<12} {:>5} {:<12} {}",
                task.id,
                task.status.label(),
                task.priority.label(),
                task.start_date,
                days,
                task.assigned_to,
                task.name
            );
        }
    }

    Ok(())
}

fn show_task(output: &Output, id: TaskId) -> Result<()> {
    let project = Project::open_current()?;
    let registry = TaskRegistry::from_tasks(project.task_store().read_all()?);

    let task: &Task = registry
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Task not found: {}", id))?;

    if output.is_json() {
        output.data(task);
    } else {
        println!("Task: {}", task.id);
        println!("Name: {}", task.name);
        println!("Start: {}", task.start_date);
        if task.is_milestone {
            println!("Milestone (zero duration)");
        } else {
            println!("Duration: {} days (ends {})", task.duration, task.end_date());
        }
        println!("Priority: {}", task.priority.label());
        println!("Status: {}", task.status.label());
        if !task.assigned_to.is_empty() {
            println!("Assigned: {}", task.assigned_to);
        }
        println!("Cost: {:.2}", task.cost);

        if !task.dependencies.is_empty() {
            println!("\nDepends on:");
            for &dep in &task.dependencies {
                match registry.get(dep) {
                    Some(dep_task) => {
                        println!("  {} {} ({})", dep, dep_task.name, dep_task.status.label())
                    }
                    None => println!("  {} (missing)", dep),
                }
            }
        }
    }

    Ok(())
}
