//! CLI integration tests for Plan
//!
//! These tests verify the complete workflow from initialization through
//! task management and schedule analysis, ensuring commands work
//! together correctly.

use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command instance for the plan binary
fn plan_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("plan"))
}

/// Create a temporary directory and initialize a plan project
fn setup_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    plan_cmd().arg("init").arg(dir.path()).assert().success();
    dir
}

/// Add a task with the given extra flags, returning its id
fn add_task(dir: &TempDir, name: &str, flags: &[&str]) -> usize {
    let output = plan_cmd()
        .current_dir(dir.path())
        .args(["task", "add", name, "--format", "json"])
        .args(flags)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    json["id"].as_u64().unwrap() as usize
}

/// Read the stored task list as JSON
fn list_tasks(dir: &TempDir) -> serde_json::Value {
    let output = plan_cmd()
        .current_dir(dir.path())
        .args(["task", "list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).unwrap()
}

// =============================================================================
// Initialization Tests
// =============================================================================

#[test]
fn test_init_creates_structure() {
    let dir = TempDir::new().unwrap();

    plan_cmd()
        .arg("init")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized plan project"));

    assert!(dir.path().join(".plan").is_dir());
    assert!(dir.path().join(".plan/config.toml").is_file());
}

#[test]
fn test_init_is_idempotent() {
    let dir = TempDir::new().unwrap();

    plan_cmd().arg("init").arg(dir.path()).assert().success();
    plan_cmd().arg("init").arg(dir.path()).assert().success();
}

#[test]
fn test_commands_outside_project_fail() {
    let dir = TempDir::new().unwrap();

    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plan init"));
}

// =============================================================================
// Task Tests
// =============================================================================

#[test]
fn test_task_add_assigns_sequential_ids() {
    let dir = setup_project();

    assert_eq!(add_task(&dir, "First", &[]), 0);
    assert_eq!(add_task(&dir, "Second", &[]), 1);
    assert_eq!(add_task(&dir, "Third", &[]), 2);
}

#[test]
fn test_task_list_shows_tasks() {
    let dir = setup_project();
    add_task(&dir, "Design phase", &[]);

    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design phase"));
}

#[test]
fn test_task_add_milestone_forces_zero_duration() {
    let dir = setup_project();
    add_task(&dir, "Launch", &["--milestone", "--duration", "10"]);

    let tasks = list_tasks(&dir);
    assert_eq!(tasks[0]["duration"], 0);
    assert_eq!(tasks[0]["is_milestone"], true);
}

#[test]
fn test_task_add_rejects_unknown_dependency() {
    let dir = setup_project();

    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "add", "Orphan", "--deps", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dependency"));
}

#[test]
fn test_task_edit_updates_fields() {
    let dir = setup_project();
    let id = add_task(&dir, "Draft", &[]);

    plan_cmd()
        .current_dir(dir.path())
        .args([
            "task",
            "edit",
            &id.to_string(),
            "--name",
            "Final",
            "--priority",
            "high",
            "--status",
            "in_progress",
        ])
        .assert()
        .success();

    let tasks = list_tasks(&dir);
    assert_eq!(tasks[0]["name"], "Final");
    assert_eq!(tasks[0]["priority"], "high");
    assert_eq!(tasks[0]["status"], "in_progress");
}

#[test]
fn test_task_edit_rejects_empty_name() {
    let dir = setup_project();
    let id = add_task(&dir, "Keep", &[]);

    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "edit", &id.to_string(), "--name", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot be empty"));

    let tasks = list_tasks(&dir);
    assert_eq!(tasks[0]["name"], "Keep");
}

#[test]
fn test_task_edit_unknown_id_fails() {
    let dir = setup_project();

    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "edit", "9", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_task_rm_renumbers_and_prunes() {
    let dir = setup_project();
    add_task(&dir, "A", &[]);
    add_task(&dir, "B", &[]);
    add_task(&dir, "C", &["--deps", "0,1"]);

    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "rm", "0"])
        .assert()
        .success();

    let tasks = list_tasks(&dir);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["id"], 0);
    assert_eq!(tasks[0]["name"], "B");
    assert_eq!(tasks[1]["id"], 1);

    // No remaining dependency id reaches the old count
    for task in tasks {
        if let Some(deps) = task["dependencies"].as_array() {
            for dep in deps {
                assert!(dep.as_u64().unwrap() < 2);
            }
        }
    }
}

#[test]
fn test_task_show_displays_details() {
    let dir = setup_project();
    add_task(&dir, "Base", &[]);
    let id = add_task(&dir, "Depends", &["--deps", "0", "--cost", "120.5"]);

    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Depends on:"))
        .stdout(predicate::str::contains("Base"))
        .stdout(predicate::str::contains("120.50"));
}

// =============================================================================
// Critical Path Tests
// =============================================================================

#[test]
fn test_critical_path_follows_longest_chain() {
    let dir = setup_project();
    add_task(&dir, "Foundation", &["--duration", "3"]);
    add_task(&dir, "Walls", &["--duration", "5", "--deps", "0"]);
    add_task(&dir, "Roof", &["--duration", "2", "--deps", "1"]);
    add_task(&dir, "Landscaping", &["--duration", "4"]);

    let output = plan_cmd()
        .current_dir(dir.path())
        .args(["critical-path", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["total_days"], 10);
    assert_eq!(json["indeterminate"], false);
}

#[test]
fn test_critical_path_cycle_is_indeterminate() {
    let dir = setup_project();
    add_task(&dir, "A", &[]);
    add_task(&dir, "B", &["--deps", "0"]);

    // Close the cycle through an edit
    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "edit", "0", "--deps", "1"])
        .assert()
        .success();

    let output = plan_cmd()
        .current_dir(dir.path())
        .args(["critical-path", "--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cycle"));

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["path"], serde_json::json!([]));
    assert_eq!(json["indeterminate"], true);
}

#[test]
fn test_critical_path_of_empty_project() {
    let dir = setup_project();

    plan_cmd()
        .current_dir(dir.path())
        .args(["critical-path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks"));
}

// =============================================================================
// Workload Tests
// =============================================================================

#[test]
fn test_workload_aggregates_per_resource() {
    let dir = setup_project();

    for name in ["Alice", "Bob"] {
        plan_cmd()
            .current_dir(dir.path())
            .args(["resource", "add", name])
            .assert()
            .success();
    }

    add_task(&dir, "One", &["--duration", "3", "--assign", "Alice"]);
    add_task(&dir, "Two", &["--duration", "5", "--assign", "Bob"]);
    add_task(&dir, "Three", &["--duration", "2"]);

    let output = plan_cmd()
        .current_dir(dir.path())
        .args(["workload", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["per_resource"]["Alice"], 3);
    assert_eq!(json["per_resource"]["Bob"], 5);
    assert_eq!(json["unassigned"], 2);
}

#[test]
fn test_resource_add_rejects_duplicates() {
    let dir = setup_project();

    plan_cmd()
        .current_dir(dir.path())
        .args(["resource", "add", "Alice"])
        .assert()
        .success();

    plan_cmd()
        .current_dir(dir.path())
        .args(["resource", "add", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_resource_rm_removes_name() {
    let dir = setup_project();

    plan_cmd()
        .current_dir(dir.path())
        .args(["resource", "add", "Alice"])
        .assert()
        .success();
    plan_cmd()
        .current_dir(dir.path())
        .args(["resource", "rm", "Alice"])
        .assert()
        .success();

    plan_cmd()
        .current_dir(dir.path())
        .args(["resource", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No resources"));
}

// =============================================================================
// Variance Tests
// =============================================================================

#[test]
fn test_variance_reflects_completion_ratio() {
    let dir = setup_project();
    add_task(
        &dir,
        "Long",
        &["--start", "2024-01-01", "--duration", "10", "--status", "completed"],
    );
    add_task(&dir, "Short", &["--start", "2024-01-01", "--duration", "5"]);

    plan_cmd()
        .current_dir(dir.path())
        .args(["variance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule variance: 5 days"));
}

#[test]
fn test_variance_of_empty_project_is_zero() {
    let dir = setup_project();

    plan_cmd()
        .current_dir(dir.path())
        .args(["variance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 days"));
}

// =============================================================================
// Leveling Tests
// =============================================================================

#[test]
fn test_level_shifts_low_priority_tasks() {
    let dir = setup_project();
    add_task(
        &dir,
        "Backlog",
        &["--start", "2024-01-01", "--priority", "low"],
    );
    add_task(
        &dir,
        "Core",
        &["--start", "2024-01-01", "--priority", "high"],
    );

    plan_cmd()
        .current_dir(dir.path())
        .args(["level"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 low-priority task"));

    let tasks = list_tasks(&dir);
    assert_eq!(tasks[0]["start_date"], "2024-01-02");
    assert_eq!(tasks[1]["start_date"], "2024-01-01");
}

// =============================================================================
// Baseline Tests
// =============================================================================

#[test]
fn test_baseline_create_requires_tasks() {
    let dir = setup_project();

    plan_cmd()
        .current_dir(dir.path())
        .args(["baseline", "create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tasks"));
}

#[test]
fn test_baseline_is_immutable_snapshot() {
    let dir = setup_project();
    let id = add_task(&dir, "Original", &["--duration", "4"]);

    plan_cmd()
        .current_dir(dir.path())
        .args(["baseline", "create"])
        .assert()
        .success();

    plan_cmd()
        .current_dir(dir.path())
        .args(["task", "edit", &id.to_string(), "--name", "Changed"])
        .assert()
        .success();

    let output = plan_cmd()
        .current_dir(dir.path())
        .args(["baseline", "list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    // The snapshot still carries the pre-edit name
    assert_eq!(json[0]["tasks"][0]["name"], "Original");
}

#[test]
fn test_baseline_list_marks_latest() {
    let dir = setup_project();
    add_task(&dir, "One", &[]);

    for _ in 0..2 {
        plan_cmd()
            .current_dir(dir.path())
            .args(["baseline", "create"])
            .assert()
            .success();
    }

    plan_cmd()
        .current_dir(dir.path())
        .args(["baseline", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(latest)"));
}

// =============================================================================
// Status Tests
// =============================================================================

#[test]
fn test_status_shows_overview() {
    let dir = setup_project();
    add_task(&dir, "Done", &["--status", "completed", "--cost", "100"]);
    add_task(&dir, "Going", &["--status", "in_progress", "--cost", "50"]);

    let output = plan_cmd()
        .current_dir(dir.path())
        .args(["status", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["stats"]["total"], 2);
    assert_eq!(json["stats"]["completed"], 1);
    assert_eq!(json["stats"]["in_progress"], 1);
    assert_eq!(json["stats"]["total_cost"], 150.0);
}
