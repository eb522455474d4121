//! Integration tests for progen-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn progen() -> Command {
    Command::cargo_bin("progen").unwrap()
}

#[test]
fn help_flag_lists_subcommands() {
    progen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_matches_cargo() {
    progen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_help_mentions_all_flags() {
    progen()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--module"))
        .stdout(predicate::str::contains("--os"))
        .stdout(predicate::str::contains("--tests"))
        .stdout(predicate::str::contains("--layout"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn new_advanced_project_succeeds() {
    let temp = TempDir::new().unwrap();

    progen()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--module", "core", "--os", "linux", "--tests", "y", "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("created with module 'core'"));

    let root = temp.path().join("demo");
    assert_eq!(
        fs::read_to_string(root.join("config_linux.ini")).unwrap(),
        "[config]\nlog_path = /var/logs/"
    );
    assert_eq!(
        fs::read_to_string(root.join("tests/test_main.py")).unwrap(),
        "# Sample test\n\ndef test_dummy():\n    assert True"
    );
    assert!(root.join("src/core/modeling/train.py").exists());
    assert!(root.join("src/core/modeling/predict.py").exists());
    assert!(root.join("data/external").is_dir());
    assert!(root.join("reports/figures").is_dir());
}

#[test]
fn new_windows_project_writes_windows_config() {
    let temp = TempDir::new().unwrap();

    progen()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--module", "core", "--os", "windows", "--yes",
        ])
        .assert()
        .success();

    let root = temp.path().join("demo");
    assert_eq!(
        fs::read_to_string(root.join("config_windows.ini")).unwrap(),
        "[config]\nlog_path = C:\\logs\\"
    );
    assert!(!root.join("config_linux.ini").exists());
    assert!(!root.join("tests").exists(), "tests not requested");
}

#[test]
fn new_simple_layout_skips_source_tree() {
    let temp = TempDir::new().unwrap();

    progen()
        .current_dir(temp.path())
        .args(["new", "demo", "--layout", "simple", "--os", "linux", "--yes"])
        .assert()
        .success();

    let root = temp.path().join("demo");
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# demo\n\nGenerated for Linux."
    );
    assert!(!root.join("src").exists());
    assert!(!root.join("pyproject.toml").exists());
}

#[test]
fn new_is_idempotent_on_rerun() {
    let temp = TempDir::new().unwrap();
    let args = [
        "new", "demo", "--module", "core", "--os", "linux", "--tests", "y", "--yes",
    ];

    progen()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();

    // Hand-edit a generated file, then re-run: it must succeed and restore
    // the canonical content.
    let readme = temp.path().join("demo/README.md");
    fs::write(&readme, "edited").unwrap();

    progen()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&readme).unwrap(),
        "# demo\n\nGenerated for Linux."
    );
}

#[test]
fn new_honours_output_flag() {
    let temp = TempDir::new().unwrap();

    progen()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--layout", "simple", "--os", "linux", "--yes", "--output", "nested/out",
        ])
        .assert()
        .success();

    assert!(temp.path().join("nested/out/demo/README.md").exists());
}

#[test]
fn new_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    progen()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--module", "core", "--os", "linux", "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("src/core/modeling/train.py"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn new_without_name_fails_without_a_terminal() {
    let temp = TempDir::new().unwrap();

    progen()
        .current_dir(temp.path())
        .arg("new")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("project name required"));
}

#[test]
fn quiet_run_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();

    progen()
        .current_dir(temp.path())
        .args([
            "-q", "new", "demo", "--module", "core", "--os", "linux", "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("demo/README.md").exists());
}

#[test]
fn shell_completions_are_generated() {
    progen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("progen"));
}

#[test]
fn config_path_prints_a_location() {
    progen()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
