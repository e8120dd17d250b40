//! Integration tests for linecount CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_linecount(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_linecount"))
        .args(args)
        .env_remove("LINECOUNT_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_linecount(&["--help"]);

    assert!(success);
    assert!(stdout.contains("linecount"));
    assert!(stdout.contains("--recursive"));
    assert!(stdout.contains("--glob"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_linecount(&["--version"]);

    assert!(success);
    assert!(stdout.contains("linecount"));
}

#[test]
fn test_no_path_prints_usage() {
    let (stdout, stderr, success) = run_linecount(&[]);

    assert!(success);
    assert!(stdout.starts_with("linecount"));
    assert!(stdout.contains("arguments:"));
    assert!(stdout.contains("-r, --recursive"));
    assert!(!stdout.contains("total lines"));
    assert!(stderr.is_empty());
}

#[test]
fn test_flat_directory() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("five.txt"), "a\nb\nc\nd\ne\nf").unwrap();
    fs::write(temp.path().join("zero.txt"), "").unwrap();
    fs::write(temp.path().join("ten.txt"), "x\n".repeat(10) + "y").unwrap();

    let (stdout, stderr, success) = run_linecount(&[&path_arg(temp.path())]);

    assert!(success);
    assert_eq!(stdout, "num files: 3\ntotal lines: 15\n");
    assert!(stderr.is_empty());
}

#[test]
fn test_non_utf8_file_is_skipped() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("bad.bin"), b"\xc3\x28\n\n").unwrap();
    fs::write(temp.path().join("seven.txt"), "line\n".repeat(7)).unwrap();

    let (stdout, stderr, success) = run_linecount(&[&path_arg(temp.path())]);

    assert!(success);
    assert_eq!(stdout, "num files: 2\ntotal lines: 7\n");
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("file not UTF-8: bad.bin"));
}

#[test]
fn test_empty_directory() {
    let temp = tempdir().unwrap();

    let (stdout, _, success) = run_linecount(&[&path_arg(temp.path())]);

    assert!(success);
    assert_eq!(stdout, "num files: 0\ntotal lines: 0\n");
}

#[test]
fn test_invalid_path() {
    let (stdout, stderr, success) = run_linecount(&["/nonexistent/path"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(!stdout.contains("total lines"));
}

#[test]
fn test_glob_mode() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("dir.txt")).unwrap();
    fs::write(temp.path().join("a.txt"), "1\n2\n").unwrap();
    fs::write(temp.path().join("b.md"), "1\n2\n3\n").unwrap();

    let pattern = path_arg(&temp.path().join("*.txt"));
    let (stdout, stderr, success) = run_linecount(&["-g", &pattern]);

    assert!(success);
    assert_eq!(stdout, "num files: 2\ntotal lines: 2\n");
    // The matched directory is logged and skipped.
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn test_invalid_glob_pattern() {
    let (stdout, stderr, success) = run_linecount(&["-g", "[invalid"]);

    assert!(!success);
    assert!(stderr.contains("invalid glob pattern"));
    assert!(!stdout.contains("total lines"));
}

#[test]
fn test_recursive_mode() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("a/b")).unwrap();
    fs::write(temp.path().join("top.txt"), "1\n").unwrap();
    fs::write(temp.path().join("a/mid.txt"), "1\n2\n").unwrap();
    fs::write(temp.path().join("a/b/low.txt"), "1\n2\n3\n").unwrap();

    let (stdout, _, success) = run_linecount(&["-r", &path_arg(temp.path())]);

    assert!(success);
    assert!(stdout.starts_with("recursive search\n"));
    assert!(stdout.contains(&path_arg(&temp.path().join("a/b"))));
    assert!(stdout.ends_with("total lines: 6\n"));
}

#[test]
fn test_recursive_missing_root_still_reports_total() {
    let (stdout, _, success) = run_linecount(&["-r", "/nonexistent/path"]);

    assert!(success);
    assert!(stdout.contains("/nonexistent/path"));
    assert!(stdout.ends_with("total lines: 0\n"));
}

#[test]
fn test_recursive_and_glob_rejected() {
    let (stdout, stderr, success) = run_linecount(&["-r", "-g", "."]);

    assert!(!success);
    assert!(stderr.contains("cannot be used with"));
    assert!(!stdout.contains("total lines"));
}
