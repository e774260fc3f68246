//! Baseline CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::{BaselineManager, TaskRegistry};
use crate::storage::Project;

#[derive(Subcommand)]
pub enum BaselineCommands {
    /// Snapshot the current task set as a new baseline
    Create,

    /// List captured baselines
    List,
}

pub fn run(cmd: BaselineCommands, output: &Output) -> Result<()> {
    match cmd {
        BaselineCommands::Create => create_baseline(output),
        BaselineCommands::List => list_baselines(output),
    }
}

fn create_baseline(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let registry = TaskRegistry::from_tasks(project.task_store().read_all()?);

    let store = project.baseline_store();
    let mut manager = BaselineManager::from_baselines(store.read_all()?);

    let baseline = manager.capture(registry.tasks())?;
    let count = baseline.len();
    store.write_all(manager.all())?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "baselines": manager.len(),
            "tasks": count,
        }));
    } else {
        output.success(&format!(
            "Created baseline {} covering {} tasks",
            manager.len(),
            count
        ));
    }

    Ok(())
}

fn list_baselines(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let manager = BaselineManager::from_baselines(project.baseline_store().read_all()?);

    if output.is_json() {
        output.data(&manager.all());
    } else if manager.is_empty() {
        println!("No baselines");
    } else {
        println!("{:<4} {:<22} TASKS", "#", "CREATED");
        println!("{}", "-".repeat(36));
        for (idx, baseline) in manager.all().iter().enumerate() {
            let marker = if idx + 1 == manager.len() { " (latest)" } else { "" };
            println!(
                "{:<4} {:<22} {}{}",
                idx + 1,
                baseline.created_at.format("%Y-%m-%d %H:%M:%S"),
                baseline.len(),
                marker
            );
        }
    }

    Ok(())
}
