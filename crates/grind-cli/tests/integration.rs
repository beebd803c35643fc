use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn grind(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("grind").unwrap();
    cmd.current_dir(dir.path()).env("GRIND_ROOT", dir.path());
    cmd
}

fn init_project(dir: &TempDir) {
    grind(dir).arg("init").assert().success();
}

// ---------------------------------------------------------------------------
// grind init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_config_and_roadmap() {
    let dir = TempDir::new().unwrap();
    grind(&dir).arg("init").assert().success();

    assert!(dir.path().join(".grind").is_dir());
    assert!(dir.path().join(".grind/config.yaml").exists());
    assert!(dir.path().join(".grind/roadmap.json").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    grind(&dir).arg("init").assert().success();
    grind(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));
}

#[test]
fn init_does_not_clobber_an_edited_roadmap() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    let roadmap = r#"{"weekly_tasks": {"1": ["only task"]}, "maintenance_tasks": ["keep going"]}"#;
    std::fs::write(dir.path().join(".grind/roadmap.json"), roadmap).unwrap();
    grind(&dir).arg("init").assert().success();

    let content = std::fs::read_to_string(dir.path().join(".grind/roadmap.json")).unwrap();
    assert!(content.contains("only task"));
}

// ---------------------------------------------------------------------------
// grind done
// ---------------------------------------------------------------------------

#[test]
fn done_marks_a_task_and_reports_remaining() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    grind(&dir)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1 — DONE"));
}

#[test]
fn done_twice_reports_already_done() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    grind(&dir).args(["done", "2"]).assert().success();
    grind(&dir)
        .args(["done", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already marked done"));
}

#[test]
fn done_out_of_range_prints_the_valid_range() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    grind(&dir)
        .args(["done", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid task number"));
}

// ---------------------------------------------------------------------------
// grind status / tasks / week
// ---------------------------------------------------------------------------

#[test]
fn status_shows_week_header_and_tasks() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    grind(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("TODO"));
}

#[test]
fn status_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    grind(&dir).args(["done", "1"]).assert().success();

    let output = grind(&dir).args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["done"], 1);
    assert_eq!(parsed["tasks"][0]["done"], true);
}

#[test]
fn tasks_lists_checkboxes() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    grind(&dir).args(["done", "1"]).assert().success();

    grind(&dir)
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [x]"))
        .stdout(predicate::str::contains("[ ]"));
}

#[test]
fn week_reports_week_and_month() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    grind(&dir)
        .arg("week")
        .assert()
        .success()
        .stdout(predicate::str::contains("Week "))
        .stdout(predicate::str::contains("Month "));
}

#[test]
fn commands_fail_cleanly_without_init() {
    let dir = TempDir::new().unwrap();

    grind(&dir)
        .arg("tasks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("grind init"));
}
