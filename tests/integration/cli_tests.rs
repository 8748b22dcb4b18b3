use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const USAGE: &str = "Usage: mediadupe <folder>

List all files that are duplicates based on content hash

Output as:
Index of duplication, filename
";

fn mediadupe() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mediadupe"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_no_arguments_prints_usage() {
    mediadupe()
        .assert()
        .success()
        .stdout(USAGE)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_two_arguments_prints_usage() {
    mediadupe().args(["a", "b"]).assert().success().stdout(USAGE);
}

#[test]
fn test_cli_unknown_flag_prints_usage() {
    mediadupe()
        .args(["--no-such-flag", "dir"])
        .assert()
        .success()
        .stdout(USAGE);
}

#[test]
fn test_cli_help() {
    mediadupe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediadupe"))
        .stdout(predicate::str::contains("--verify"));
}

#[test]
fn test_cli_nonexistent_folder() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    mediadupe()
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("0,").not());
}

/// Nest directories below `root` until the full path exceeds PATH_MAX.
#[cfg(unix)]
fn create_overlong_tree(root: &Path) {
    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(root).unwrap();
    let name = "d".repeat(200);
    for _ in 0..22 {
        fs::create_dir(&name).unwrap();
        std::env::set_current_dir(&name).unwrap();
    }
    fs::write("deep.png", "deep").unwrap();
    std::env::set_current_dir(original).unwrap();
}

#[cfg(unix)]
#[test]
fn test_cli_walk_error_aborts_with_message() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.png"), [1u8; 10]).unwrap();
    fs::write(dir.path().join("b.png"), [1u8; 10]).unwrap();
    create_overlong_tree(dir.path());

    mediadupe()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("I/O error"))
        .stdout(predicate::str::contains("0,").not());
}

#[test]
fn test_cli_relative_root_reports_relative_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.png"), [1u8; 100]).unwrap();
    fs::write(dir.path().join("b.png"), [1u8; 100]).unwrap();
    fs::write(dir.path().join("c.txt"), [1u8; 100]).unwrap();

    mediadupe()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout("0,./a.png\n0,./b.png\n");
}

#[test]
fn test_cli_distinct_sizes_print_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.png"), [1u8; 100]).unwrap();
    fs::write(dir.path().join("b.jpg"), [1u8; 200]).unwrap();

    mediadupe()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_verify_drops_prefix_only_matches() {
    let dir = tempdir().unwrap();
    let mut a = vec![0u8; 9_000];
    let b = a.clone();
    a[8_500] = 0xff;
    fs::write(dir.path().join("a.mp4"), &a).unwrap();
    fs::write(dir.path().join("b.mp4"), &b).unwrap();

    mediadupe()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout("0,./a.mp4\n0,./b.mp4\n")
        .stderr(predicate::str::contains("--verify"));

    mediadupe()
        .current_dir(dir.path())
        .args(["--verify", "."])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_stats_on_stderr() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.png"), b"same").unwrap();
    fs::write(dir.path().join("b.png"), b"same").unwrap();
    fs::write(dir.path().join("readme.md"), b"docs").unwrap();

    mediadupe()
        .args(["--stats", "-q"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0,"))
        .stderr(predicate::str::contains("Eligible files analyzed: 2"))
        .stderr(predicate::str::contains(".md, 1 files"));
}
