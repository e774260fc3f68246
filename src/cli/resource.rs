//! Resource CLI commands
//!
//! The resource list is a set of bare names; workload aggregation is the
//! only consumer that gives them meaning.

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::Project;

#[derive(Subcommand)]
pub enum ResourceCommands {
    /// Add a resource name
    Add {
        /// Resource name
        name: String,
    },

    /// Remove a resource name
    Rm {
        /// Resource name
        name: String,
    },

    /// List resource names
    List,
}

pub fn run(cmd: ResourceCommands, output: &Output) -> Result<()> {
    match cmd {
        ResourceCommands::Add { name } => add_resource(output, &name),
        ResourceCommands::Rm { name } => remove_resource(output, &name),
        ResourceCommands::List => list_resources(output),
    }
}

fn add_resource(output: &Output, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Resource name cannot be empty");
    }

    let project = Project::open_current()?;
    let store = project.resource_store();
    let mut resources = store.read_all()?;

    if resources.iter().any(|r| r == name) {
        anyhow::bail!("Resource already exists: {}", name);
    }

    resources.push(name.to_string());
    store.write_all(&resources)?;

    output.success(&format!("Added resource: {}", name));
    Ok(())
}

fn remove_resource(output: &Output, name: &str) -> Result<()> {
    let project = Project::open_current()?;
    let store = project.resource_store();
    let mut resources = store.read_all()?;

    let before = resources.len();
    resources.retain(|r| r != name);
    if resources.len() == before {
        anyhow::bail!("Resource not found: {}", name);
    }

    store.write_all(&resources)?;

    output.success(&format!("Removed resource: {}", name));
    Ok(())
}

fn list_resources(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let resources = project.resource_store().read_all()?;

    if output.is_json() {
        output.data(&resources);
    } else if resources.is_empty() {
        println!("No resources");
    } else {
        for resource in &resources {
            println!("{}", resource);
        }
    }

    Ok(())
}
