// Contract tests for the interactive `pysetup` binary

use assert_cmd::Command;
use predicates::prelude::*;
use pysetup::models::template::{GITIGNORE, PIPFILE};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// pysetup itself answers `--version`, so it stands in for the interpreter
fn pysetup(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pysetup").unwrap();
    cmd.current_dir(dir)
        .env("PYSETUP_PYTHON", env!("CARGO_BIN_EXE_pysetup"))
        .env_remove("PYSETUP_LOG")
        .env_remove("PYSETUP_LOG_LEVEL")
        .env_remove("PYSETUP_RETRIES");
    cmd
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_new_project_is_scaffolded() {
    let temp_dir = TempDir::new().unwrap();

    pysetup(temp_dir.path())
        .write_stdin("my_project\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the name of your python project: "))
        .stderr(predicate::str::contains("Python interpreter is installed: pysetup"))
        .stderr(predicate::str::contains("Folder 'my_project' created."))
        .stderr(predicate::str::contains("Setup will proceed using the folder: my_project"))
        .stderr(predicate::str::contains("Pipfile created."))
        .stderr(predicate::str::contains(".gitignore file created."));

    let project = temp_dir.path().join("my_project");
    assert_eq!(fs::read_to_string(project.join("Pipfile")).unwrap(), PIPFILE.content);
    assert_eq!(fs::read_to_string(project.join(".gitignore")).unwrap(), GITIGNORE.content);
    assert!(project.join("src").is_dir());
    assert!(project.join("tests").is_dir());
    assert_eq!(entries(&project), 4);
}

#[test]
fn test_log_lines_are_timestamped_and_leveled() {
    let temp_dir = TempDir::new().unwrap();

    pysetup(temp_dir.path())
        .write_stdin("stamped\n")
        .assert()
        .success()
        .stderr(
            predicate::str::is_match(r"(?m)^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}\s+INFO ")
                .unwrap(),
        );
}

#[test]
fn test_invalid_name_exits_before_any_change() {
    let temp_dir = TempDir::new().unwrap();

    pysetup(temp_dir.path())
        .write_stdin("bad/name\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'bad/name' is not a valid folder name"));

    assert_eq!(entries(temp_dir.path()), 0);
}

#[test]
fn test_punctuation_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    pysetup(temp_dir.path())
        .args(["--name", "name!"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("underscores, hyphens and spaces"));

    assert_eq!(entries(temp_dir.path()), 0);
}

#[test]
fn test_missing_interpreter() {
    let temp_dir = TempDir::new().unwrap();

    pysetup(temp_dir.path())
        .env("PYSETUP_PYTHON", "pysetup-missing-python-interpreter")
        .write_stdin("my_project\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Enter the name").not())
        .stderr(predicate::str::contains("Python interpreter is not installed."));

    assert_eq!(entries(temp_dir.path()), 0);
}

#[test]
fn test_declining_existing_folder_cancels() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("existing")).unwrap();

    pysetup(temp_dir.path())
        .write_stdin("existing\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The folder 'existing' already exists. Do you want to use this existing folder? (yes/no): ",
        ))
        .stderr(predicate::str::contains("User chose not to use the existing folder."))
        .stderr(predicate::str::contains("Setup was cancelled by the user."));

    assert_eq!(entries(&temp_dir.path().join("existing")), 0);
}

#[test]
fn test_reused_folder_keeps_declined_files() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("existing");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("Pipfile"), "[packages]\nflask = \"*\"\n").unwrap();

    pysetup(temp_dir.path())
        .write_stdin("existing\nY\nn\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Using the existing folder: existing"))
        .stderr(predicate::str::contains("User chose not to overwrite the existing file"));

    assert_eq!(
        fs::read_to_string(project.join("Pipfile")).unwrap(),
        "[packages]\nflask = \"*\"\n"
    );
    assert_eq!(fs::read_to_string(project.join(".gitignore")).unwrap(), GITIGNORE.content);
    assert!(project.join("src").is_dir());
}

#[test]
fn test_exhausted_retries_exit_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("existing")).unwrap();

    pysetup(temp_dir.path())
        .write_stdin("existing\nmaybe\nperhaps\nsure\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid input. Please answer 'yes' or 'no'."))
        .stderr(predicate::str::contains("Too many invalid inputs."));
}

#[test]
fn test_retry_limit_flag() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("existing")).unwrap();

    // With one attempt the trailing "yes" is never read
    pysetup(temp_dir.path())
        .args(["--retries", "1"])
        .write_stdin("existing\nmaybe\nyes\n")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_closed_stdin_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();

    pysetup(temp_dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Standard input closed"));

    assert_eq!(entries(temp_dir.path()), 0);
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();

    let output = pysetup(temp_dir.path())
        .args(["--name", "demo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "completed");
    assert_eq!(json["project_name"], "demo");
    assert_eq!(json["folder"], "created");
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert_eq!(json["files"][0]["action"], "written");
    assert_eq!(json["directories"][1]["action"], "created");
    assert!(json["interpreter_version"].as_str().unwrap().starts_with("pysetup "));
}

#[test]
fn test_json_mode_moves_prompts_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("existing")).unwrap();

    let output = pysetup(temp_dir.path())
        .arg("--json")
        .write_stdin("existing\nn\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Enter the name of your python project: "));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "cancelled");
    assert_eq!(json["folder"], "declined");
}

#[test]
fn test_quiet_log_level() {
    let temp_dir = TempDir::new().unwrap();

    pysetup(temp_dir.path())
        .args(["--log-level", "error"])
        .write_stdin("quiet\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO").not());
}
