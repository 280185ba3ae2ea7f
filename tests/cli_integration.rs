//! CLI Integration Tests
//!
//! These tests drive the built `hashroot` binary end-to-end against files
//! in temporary directories.
//!
//! Run with:
//! ```bash
//! cargo test --test cli_integration
//! ```

use hashroot::{HashFunction, Sha256Hash};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Get the path to the built binary
fn hashroot_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hashroot"))
}

/// Run hashroot and return (stdout, stderr, exit code)
fn run_hashroot(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(hashroot_binary())
        .env_remove("RUST_LOG")
        .args(["-a", "sha256"])
        .args(args)
        .output()
        .expect("Failed to execute hashroot");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code(),
    )
}

fn h(s: &str) -> String {
    Sha256Hash.hash_str(s)
}

fn hh(a: &str, b: &str) -> String {
    h(&format!("{}{}", a, b))
}

fn write_records(path: &Path, records: &[&str]) {
    fs::write(path, records.join("\n")).unwrap();
}

fn as_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ============================================================================
// End-to-end check scenario
// ============================================================================

#[test]
fn test_cli_first_run_approved_then_tampered() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    let store = dir.path().join("root.txt");
    write_records(&input, &["alpha", "beta", "gamma", "delta"]);

    let expected = hh(
        &hh(&h("alpha"), &h("beta")),
        &hh(&h("gamma"), &h("delta")),
    );

    let args = ["check", as_str(&input), "--store", as_str(&store)];

    let (stdout, _stderr, code) = run_hashroot(&args);
    assert_eq!(code, Some(0), "first run should succeed");
    assert!(stdout.contains("Status: FirstRun"), "got: {}", stdout);
    assert!(stdout.contains(&format!("Root: {}", expected)));
    assert!(stdout.contains("Records: 4"));
    assert_eq!(fs::read_to_string(&store).unwrap(), expected);

    let (stdout, _stderr, code) = run_hashroot(&args);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Status: Approved"), "got: {}", stdout);
    assert!(stdout.contains(&format!("Stored: {}", expected)));

    write_records(&input, &["alpha", "beta", "gamma2", "delta"]);
    let tampered = hh(
        &hh(&h("alpha"), &h("beta")),
        &hh(&h("gamma2"), &h("delta")),
    );

    let (stdout, _stderr, code) = run_hashroot(&args);
    assert_eq!(code, Some(2), "tampering should exit with code 2");
    assert!(stdout.contains("Status: Tampered"), "got: {}", stdout);
    assert_eq!(fs::read_to_string(&store).unwrap(), tampered);

    let (stdout, _stderr, code) = run_hashroot(&args);
    assert_eq!(code, Some(0), "new baseline should be approved");
    assert!(stdout.contains("Status: Approved"));
}

#[test]
fn test_cli_default_store_is_beside_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    write_records(&input, &["a", "b"]);

    let (_stdout, _stderr, code) = run_hashroot(&["check", as_str(&input)]);
    assert_eq!(code, Some(0));

    let stored = fs::read_to_string(dir.path().join("data.txt.root")).unwrap();
    assert_eq!(stored, hh(&h("a"), &h("b")));
}

#[test]
fn test_cli_check_json_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    let store = dir.path().join("root.txt");
    write_records(&input, &["a", "b", "c"]);

    let (stdout, _stderr, code) = run_hashroot(&[
        "-f",
        "json",
        "check",
        as_str(&input),
        "--store",
        as_str(&store),
    ]);
    assert_eq!(code, Some(0));

    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["status"], "first_run");
    assert_eq!(value["records"], 3);
    assert_eq!(value["algorithm"], "sha256");
    assert_eq!(value["shape"], "halving");
    assert!(value["previous"].is_null());
    assert_eq!(
        value["root"],
        hh(&hh(&h("a"), &h("b")), &hh(&h("c"), &h("c")))
    );
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_cli_empty_input_fails_without_touching_store() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let store = dir.path().join("root.txt");
    fs::write(&input, "").unwrap();

    let (_stdout, stderr, code) =
        run_hashroot(&["check", as_str(&input), "--store", as_str(&store)]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("Empty input"), "got: {}", stderr);
    assert!(!store.exists(), "store must not be created on empty input");
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.txt");

    let (_stdout, stderr, code) = run_hashroot(&["root", as_str(&input)]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("reading records"), "got: {}", stderr);
}

#[test]
fn test_cli_unknown_algorithm_fails_at_startup() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    write_records(&input, &["a"]);

    let output = Command::new(hashroot_binary())
        .args(["-a", "tiger", "root", as_str(&input)])
        .output()
        .expect("Failed to execute hashroot");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Hash algorithm unavailable"), "got: {}", stderr);
}

// ============================================================================
// Root and tree commands
// ============================================================================

#[test]
fn test_cli_root_prints_digest_only() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    write_records(&input, &["a"]);

    let (stdout, _stderr, code) = run_hashroot(&["root", as_str(&input)]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), hh(&h("a"), &h("a")));
    assert!(!dir.path().join("data.txt.root").exists());
}

#[test]
fn test_cli_shape_flag_changes_digest() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    write_records(&input, &["0", "1", "2", "3", "4"]);

    let (halving, _, _) = run_hashroot(&["root", as_str(&input)]);
    let (compat, _, _) = run_hashroot(&["--shape", "compat", "root", as_str(&input)]);
    assert_eq!(
        compat.trim(),
        "43628246e895ff069d75b6ca042c442ae0bfdce85fb5104fdfb3503d2a7c7919"
    );
    assert_ne!(halving.trim(), compat.trim());
}

#[test]
fn test_cli_tree_dump_marks_phantoms() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    write_records(&input, &["a", "b", "c"]);

    let (stdout, _stderr, code) = run_hashroot(&["tree", as_str(&input)]);
    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("Left: "));
    assert_eq!(stdout.matches("Entry").count(), 4);
    assert_eq!(stdout.matches("(phantom element)").count(), 1);
    assert!(stdout.contains("Content: a+b+c+c"));
}

#[test]
fn test_cli_check_show_tree_echoes_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    let store = dir.path().join("root.txt");
    write_records(&input, &["a", "b", "c"]);

    let (stdout, _stderr, code) =
        run_hashroot(&["check", as_str(&input), "--store", as_str(&store), "--show-tree"]);
    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("Input: [a, b, c]\n"), "got: {}", stdout);
    assert!(stdout.contains("Content: a+b+c+c"));
    assert!(stdout.contains("Records: 3"));

    let (stdout, _stderr, _code) = run_hashroot(&["check", as_str(&input), "--store", as_str(&store)]);
    assert!(!stdout.contains("Input:"));
    assert!(stdout.contains("Records: 3"));
}

#[test]
fn test_cli_tree_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    write_records(&input, &["a", "b"]);

    let (stdout, _stderr, code) = run_hashroot(&["-f", "json", "tree", as_str(&input)]);
    assert_eq!(code, Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(value["nodes"][0]["content"], "a+b");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_cli_config_file_sets_store_and_shape() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    let store = dir.path().join("configured.root");
    let config = dir.path().join("config.json");
    write_records(&input, &["0", "1", "2", "3", "4"]);
    fs::write(
        &config,
        serde_json::json!({
            "algorithm": "sha256",
            "shape": "compat",
            "store_path": store
        })
        .to_string(),
    )
    .unwrap();

    let output = Command::new(hashroot_binary())
        .args(["-c", as_str(&config), "check", as_str(&input)])
        .output()
        .expect("Failed to execute hashroot");
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&store).unwrap(),
        "43628246e895ff069d75b6ca042c442ae0bfdce85fb5104fdfb3503d2a7c7919"
    );
}
