//! # Storage Layer
//!
//! Persistence for plan projects: a `.plan/` directory of plain files.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | JSON array | `.plan/tasks.json` |
//! | Resources | JSON array | `.plan/resources.json` |
//! | Baselines | JSON array | `.plan/baselines.json` |
//! | Config | TOML | `.plan/config.toml` |
//!
//! All writes are atomic (temp file + rename) and stores take `fs2`
//! file locks, so concurrent invocations never observe a torn file.

mod config;
mod project;
mod store;

pub use config::Config;
pub use project::{Project, ProjectError};
pub use store::{BaselineStore, ResourceStore, TaskStore};
