//! CLI integration tests - end-to-end testing of codeskel commands.
//!
//! These tests spawn the actual codeskel binary and verify its output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the codeskel binary.
fn codeskel() -> Command {
    Command::cargo_bin("codeskel").expect("Failed to find codeskel binary")
}

/// Create a test project with sample files.
fn create_test_project() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");

    fs::create_dir_all(temp.path().join("src")).unwrap();

    fs::write(
        temp.path().join("src/main.py"),
        r#"def main():
    """Entry point."""
    print("Hello, world!")
"#,
    )
    .unwrap();

    fs::write(
        temp.path().join("src/lib.rs"),
        r#"pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}
"#,
    )
    .unwrap();

    fs::write(
        temp.path().join("README.md"),
        "# Test Project\n\nA simple test.\n",
    )
    .unwrap();

    temp
}

// ============================================================================
// Extract Command Tests
// ============================================================================

#[test]
fn test_cli_extract_file() {
    let project = create_test_project();

    codeskel()
        .args(["extract", project.path().join("src/main.py").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("def main():"))
        .stdout(predicate::str::contains("Entry point."))
        .stdout(predicate::str::contains("print").not());
}

#[test]
fn test_cli_extract_stdin_with_language() {
    codeskel()
        .args(["extract", "-l", "python"])
        .write_stdin("def f():\n    x = 1\n    return x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("def f():"))
        .stdout(predicate::str::contains("x = 1").not());
}

#[test]
fn test_cli_extract_stdin_without_language_fails() {
    codeskel()
        .arg("extract")
        .write_stdin("def f():\n    pass\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("language required"));
}

#[test]
fn test_cli_extract_unsupported_language() {
    codeskel()
        .args(["extract", "-l", "cobol"])
        .write_stdin("PROGRAM-ID. HELLO.\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_cli_extract_unknown_extension_suggests_flag() {
    let project = create_test_project();

    codeskel()
        .args(["extract", project.path().join("README.md").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("use -l/--language"));
}

#[test]
fn test_cli_extract_json_output() {
    let project = create_test_project();

    codeskel()
        .args([
            "extract",
            project.path().join("src/main.py").to_str().unwrap(),
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"python\""))
        .stdout(predicate::str::contains("\"skeleton\""));
}

#[test]
fn test_cli_extract_to_output_file() {
    let project = create_test_project();
    let out = project.path().join("skeleton.txt");

    codeskel()
        .args([
            "extract",
            project.path().join("src/main.py").to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("def main():"));
    assert!(!written.contains("print"));
}

// ============================================================================
// Concat Command Tests
// ============================================================================

#[test]
fn test_cli_concat_directory() {
    let project = create_test_project();

    codeskel()
        .args(["concat", project.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- src/main.py"))
        .stdout(predicate::str::contains("--- src/lib.rs"))
        .stdout(predicate::str::contains("--- README.md"))
        .stdout(predicate::str::contains("print").not());
}

#[test]
fn test_cli_concat_no_extract_keeps_bodies() {
    let project = create_test_project();

    codeskel()
        .args(["concat", project.path().to_str().unwrap(), "--no-extract"])
        .assert()
        .success()
        .stdout(predicate::str::contains("print(\"Hello, world!\")"));
}

#[test]
fn test_cli_concat_json_output() {
    let project = create_test_project();

    codeskel()
        .args(["concat", project.path().to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files\": 3"))
        .stdout(predicate::str::contains("\"content\""));
}

#[test]
fn test_cli_concat_empty_directory_fails() {
    let empty = TempDir::new().unwrap();

    codeskel()
        .args(["concat", empty.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no files found"));
}

// ============================================================================
// Tree Command Tests
// ============================================================================

#[test]
fn test_cli_tree() {
    let project = create_test_project();

    codeskel()
        .args(["tree", project.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("└─"))
        .stdout(predicate::str::contains("src"))
        .stdout(predicate::str::contains("main.py"));
}

#[test]
fn test_cli_tree_ignore_pattern() {
    let project = create_test_project();

    codeskel()
        .args([
            "tree",
            project.path().to_str().unwrap(),
            "-I",
            "*.md",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md").not());
}

// ============================================================================
// Files Command Tests
// ============================================================================

#[test]
fn test_cli_files_lists_sorted_paths() {
    let project = create_test_project();

    codeskel()
        .args(["files", project.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md\nsrc/lib.rs\nsrc/main.py"));
}

#[test]
fn test_cli_files_json_is_array() {
    let project = create_test_project();

    codeskel()
        .args(["files", project.path().to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"src/main.py\""));
}

#[test]
fn test_cli_files_non_recursive() {
    let project = create_test_project();

    codeskel()
        .args(["files", project.path().to_str().unwrap(), "--no-recursive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("src/main.py").not());
}
