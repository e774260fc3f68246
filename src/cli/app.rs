//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{baseline, resource, schedule, status, task};
use crate::storage::Project;

#[derive(Parser)]
#[command(name = "plan")]
#[command(author, version, about = "Local-first project scheduling with critical-path analysis")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new plan project
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Project name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Manage tasks
    #[command(subcommand)]
    Task(task::TaskCommands),

    /// Manage resource names
    #[command(subcommand)]
    Resource(resource::ResourceCommands),

    /// Manage baselines
    #[command(subcommand)]
    Baseline(baseline::BaselineCommands),

    /// Show the critical path through the dependency graph
    CriticalPath,

    /// Show allocated days per resource
    Workload,

    /// Show the schedule variance estimate
    Variance,

    /// Shift low-priority tasks forward by one day
    Level,

    /// Show the project status overview
    Status,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::Init { path, name } => {
            output.verbose(&format!("Initializing project at: {}", path));
            let project = Project::init(&path, name.as_deref())?;
            output.success(&format!(
                "Initialized plan project '{}' at {}",
                project.config().name,
                project.root().display()
            ));
        }

        Commands::Task(cmd) => task::run(cmd, &output)?,
        Commands::Resource(cmd) => resource::run(cmd, &output)?,
        Commands::Baseline(cmd) => baseline::run(cmd, &output)?,

        Commands::CriticalPath => schedule::show_critical_path(&output)?,
        Commands::Workload => schedule::show_workload(&output)?,
        Commands::Variance => schedule::show_variance(&output)?,
        Commands::Level => schedule::run_leveling(&output)?,
        Commands::Status => status::show_status(&output)?,
    }

    Ok(())
}
