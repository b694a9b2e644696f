// Runs the validate-structure and setup-project binaries against scratch directories.
use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};

fn validate_structure(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("validate-structure").unwrap();
    cmd.arg("--root").arg(root).env("NO_COLOR", "1");
    cmd
}

fn setup_project(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("setup-project").unwrap();
    cmd.current_dir(root).env("NO_COLOR", "1");
    cmd
}

/// Writes the entries that exist before scaffolding, plus the npm lockfile.
fn add_pre_existing_assets(root: &Path) {
    fs::create_dir_all(root.join(".github/workflows")).unwrap();
    fs::create_dir_all(root.join(".github/ISSUE_TEMPLATE")).unwrap();
    fs::write(root.join(".github/workflows/validate-structure.yml"), "").unwrap();
    fs::write(root.join(".github/ISSUE_TEMPLATE/FEATURE_REQUEST.md"), "").unwrap();

    for file in [
        "README.md",
        "CODING_GUIDELINES.md",
        "PROJECT_STRUCTURE.md",
        "package-lock.json",
    ] {
        fs::write(root.join(file), "").unwrap();
    }
}

#[test]
fn validate_empty_root_fails() {
    let root = tempfile::tempdir().unwrap();

    let output = validate_structure(root.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let missing: Vec<&str> = stderr
        .lines()
        .filter(|line| line.starts_with("Missing file: ") || line.starts_with("Missing directory: "))
        .collect();
    assert_eq!(missing.len(), 16);
    assert!(missing.contains(&format!("Missing directory: {}", root.path().join("src").display()).as_str()));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Project structure validation failed."));
}

#[test]
fn validate_mismatch_lines_are_never_colored() {
    let root = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("validate-structure")
        .unwrap()
        .arg("--root")
        .arg(root.path())
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains('\u{1b}'), "{:?}", stderr);

    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(
        lines[0],
        format!("Missing directory: {}", root.path().join(".github").display())
    );
    assert_eq!(
        lines[15],
        format!(
            "Missing file: {}",
            root.path().join("electron-packager-config.json").display()
        )
    );
}

#[test]
fn setup_then_validate_succeeds() {
    let root = tempfile::tempdir().unwrap();

    setup_project(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created file: src/main.js"))
        .stdout(predicate::str::contains("Created directory: vendor/node"))
        .stdout(predicate::str::contains("Skipped (pre-existing): .github"))
        .stdout(predicate::str::ends_with("Project setup complete.\n"));

    // scaffolding alone leaves the hand-written assets missing
    validate_structure(root.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("README.md"))
        .stderr(predicate::str::contains("package-lock.json"));

    add_pre_existing_assets(root.path());

    validate_structure(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project structure validated successfully.",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn setup_is_idempotent() {
    let root = tempfile::tempdir().unwrap();

    setup_project(root.path()).assert().success();

    let main_js = root.path().join("src/main.js");
    fs::write(&main_js, "// edited\n").unwrap();

    setup_project(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File exists: src/main.js"))
        .stdout(predicate::str::contains("Directory exists: src/renderer"))
        .stdout(predicate::str::contains("Created").not());

    assert_eq!(fs::read_to_string(&main_js).unwrap(), "// edited\n");
}

#[test]
fn setup_dry_run_writes_nothing() {
    let root = tempfile::tempdir().unwrap();

    setup_project(root.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview"))
        .stdout(predicate::str::contains("main.js (new)"));

    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn setup_fails_when_a_directory_is_blocked() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("tests"), "").unwrap();

    setup_project(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("skelly::scaffold::io"));
}
