//! Integration tests for the binary's non-interactive paths.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_data.json")
}

/// A config that keeps the log file inside a per-test temp directory.
fn isolated_config(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shoplist_cli_{test}"));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let config = dir.join("config.toml");
    std::fs::write(
        &config,
        format!("log_file_path = {:?}\n", dir.join("shoplist.log")),
    )
    .expect("write config");
    config
}

fn log_file(test: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("shoplist_cli_{test}"))
        .join("shoplist.log")
}

fn shoplist(test: &str) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_shoplist"));
    command
        .env("SHOPLIST_CONFIG", isolated_config(test))
        .env_remove("SHOPLIST_DATA")
        .env_remove("SHOPLIST_SORT")
        .env_remove("RUST_LOG");
    command
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn binary_prints_version() {
    let output = shoplist("version")
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(
        stdout_of(&output).contains(env!("CARGO_PKG_VERSION")),
        "got: {}",
        stdout_of(&output)
    );
}

#[test]
fn print_renders_board_from_file() {
    let output = shoplist("print_file")
        .arg(fixture_path())
        .arg("--print")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Active lists (2)\n"), "got: {stdout}");
    assert!(stdout.contains("#1 Wocheneinkauf  1/3  shared with anna"));
    assert!(stdout.contains("Completed lists (1)"));
}

#[test]
fn print_reads_piped_stdin() {
    let mut child = shoplist("print_stdin")
        .args(["-", "--print"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");

    let data = std::fs::read(fixture_path()).expect("fixture");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(&data)
        .expect("write stdin");
    let output = child.wait_with_output().expect("binary finishes");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("#2 Grillabend  2/2"));
}

#[test]
fn print_without_data_shows_empty_board() {
    let output = shoplist("print_empty")
        .arg("--print")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Active lists (0)\n  (none)\nCompleted lists (0)\n  (none)\n"
    );
}

#[test]
fn missing_data_file_fails() {
    let output = shoplist("missing")
        .args(["/nonexistent/shoplist.json", "--print"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("FileNotFound"));
}

#[test]
fn bad_sort_env_is_logged_after_startup() {
    let _ = std::fs::remove_file(log_file("bad_sort"));
    let output = shoplist("bad_sort")
        .env("SHOPLIST_SORT", "sideways")
        .arg(fixture_path())
        .arg("--print")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("Active lists (2)\n"));

    let log = std::fs::read_to_string(log_file("bad_sort")).expect("log file written");
    assert!(log.contains("Ignoring environment override"), "log: {log}");
    assert!(log.contains("SHOPLIST_SORT"), "log: {log}");
    assert!(log.contains("sideways"), "log: {log}");
}
