//! Integration tests for the mcpforge binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

fn mcpforge(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mcpforge").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("MCPFORGE__OUTPUT__FORMAT")
        .env_remove("MCPFORGE__OUTPUT__NO_COLOR");
    cmd
}

fn entry_count(dir: &Path) -> usize {
    WalkDir::new(dir).min_depth(1).into_iter().count()
}

#[test]
fn help_flag_shows_usage() {
    let temp = TempDir::new().unwrap();
    mcpforge(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT_NAME"))
        .stdout(predicate::str::contains("--output-format"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    mcpforge(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generates_project_with_progress_and_banner() {
    let temp = TempDir::new().unwrap();

    mcpforge(temp.path())
        .arg("calc_demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating MCP Server project: calc_demo"))
        .stdout(predicate::str::contains("Platform: "))
        .stdout(predicate::str::contains("Created directory: calc_demo"))
        .stdout(predicate::str::contains("Created file: "))
        .stdout(predicate::str::contains("fastmcp.json"))
        .stdout(predicate::str::contains(
            "MCP Server project 'calc_demo' created successfully!",
        ))
        .stdout(predicate::str::contains("python src/server/app.py"))
        .stdout(predicate::str::contains("http://localhost:8001/mcp"));

    let root = temp.path().join("calc_demo");
    assert!(root.join("src/server/app.py").is_file());
    assert!(root.join("src/server/tools/calculator_tools.py").is_file());
    assert!(root.join("setup.sh").is_file());
    assert_eq!(entry_count(temp.path()), 25);

    let app = std::fs::read_to_string(root.join("src/server/app.py")).unwrap();
    assert!(app.contains("Calc Demo MCP Server"));
}

#[test]
fn prints_one_line_per_created_entry() {
    let temp = TempDir::new().unwrap();
    let out = mcpforge(temp.path()).arg("calc_demo").output().unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert_eq!(stdout.matches("Created directory: ").count(), 7);
    assert_eq!(stdout.matches("Created file: ").count(), 18);
}

#[test]
fn existing_directory_fails_with_exit_2() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("calc_demo")).unwrap();

    mcpforge(temp.path())
        .arg("calc_demo")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(entry_count(temp.path()), 1);
}

#[test]
fn second_run_does_not_touch_first_project() {
    let temp = TempDir::new().unwrap();
    mcpforge(temp.path()).arg("calc_demo").assert().success();
    let readme = temp.path().join("calc_demo/README.md");
    std::fs::write(&readme, "mine").unwrap();

    mcpforge(temp.path()).arg("calc_demo").assert().code(2);

    assert_eq!(std::fs::read_to_string(&readme).unwrap(), "mine");
}

#[test]
fn missing_argument_prints_usage_and_touches_nothing() {
    let temp = TempDir::new().unwrap();

    mcpforge(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert_eq!(entry_count(temp.path()), 0);
}

#[test]
fn extra_argument_prints_usage_and_touches_nothing() {
    let temp = TempDir::new().unwrap();

    mcpforge(temp.path())
        .args(["one", "two"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert_eq!(entry_count(temp.path()), 0);
}

#[test]
fn empty_name_is_rejected_as_existing() {
    let temp = TempDir::new().unwrap();

    mcpforge(temp.path())
        .arg("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(entry_count(temp.path()), 0);
}

#[test]
fn json_output_lists_manifest() {
    let temp = TempDir::new().unwrap();
    let out = mcpforge(temp.path())
        .args(["--output-format", "json", "calc_demo"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["project"], "calc_demo");
    assert_eq!(report["display_name"], "Calc Demo");
    assert_eq!(report["entries"].as_array().unwrap().len(), 25);
    assert_eq!(report["entries"][0]["kind"], "directory");
}

#[test]
fn quiet_suppresses_progress() {
    let temp = TempDir::new().unwrap();

    mcpforge(temp.path())
        .args(["--quiet", "calc_demo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("calc_demo/fastmcp.json").is_file());
}

#[test]
fn config_file_selects_output_format() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("mcpforge.toml");
    std::fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    mcpforge(temp.path())
        .args(["--config", "mcpforge.toml", "calc_demo"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn missing_config_file_exits_4() {
    let temp = TempDir::new().unwrap();

    mcpforge(temp.path())
        .args(["--config", "nope.toml", "calc_demo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert_eq!(entry_count(temp.path()), 0);
}

#[cfg(unix)]
#[test]
fn setup_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    mcpforge(temp.path()).arg("calc_demo").assert().success();

    let mode = std::fs::metadata(temp.path().join("calc_demo/setup.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o100, 0);
}
