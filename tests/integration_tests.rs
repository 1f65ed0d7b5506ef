use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Command with `HOME` pointed at `home`, so no user config or history leaks in
fn clipstash(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Write a history file (one escaped entry per line, newest first)
fn write_history(home: &TempDir, lines: &[&str]) -> PathBuf {
    let path = home.path().join("history");
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents).unwrap();
    path
}

fn write_config(home: &TempDir, toml: &str) {
    let dir = home.path().join(".config").join("clipstash");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), toml).unwrap();
}

#[test]
fn test_cli_help_flag() {
    let home = TempDir::new().unwrap();
    clipstash(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("monitor"))
        .stdout(predicate::str::contains("select"));
}

#[test]
fn test_cli_version_flag() {
    let home = TempDir::new().unwrap();
    clipstash(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipstash"));
}

#[test]
fn test_list_without_history_file() {
    let home = TempDir::new().unwrap();
    clipstash(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clipboard history is empty"));
}

#[test]
fn test_list_uses_default_history_under_home() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".clipboard_history"), "from home\n").unwrap();

    clipstash(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. from home"));
}

#[test]
fn test_list_numbers_entries_newest_first() {
    let home = TempDir::new().unwrap();
    let history = write_history(&home, &["third", "second", "first"]);

    clipstash(home.path())
        .arg("list")
        .arg("--history-file")
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. third\n2. second\n3. first\n"));
}

#[test]
fn test_list_json_has_full_entries() {
    let home = TempDir::new().unwrap();
    let history = write_history(&home, &[r"line one\nline two", "plain"]);

    let output = clipstash(home.path())
        .args(["list", "--json", "--history-file"])
        .arg(&history)
        .output()
        .unwrap();

    assert!(output.status.success());
    let entries: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries, vec!["line one\nline two", "plain"]);
}

#[test]
fn test_max_entries_flag_limits_loaded_history() {
    let home = TempDir::new().unwrap();
    let history = write_history(&home, &["c", "b", "a"]);

    clipstash(home.path())
        .args(["list", "--max-entries", "2", "--history-file"])
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("2. b"))
        .stdout(predicate::str::contains("a").not());
}

#[test]
fn test_zero_max_entries_is_rejected() {
    let home = TempDir::new().unwrap();
    clipstash(home.path())
        .args(["list", "--max-entries", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_preview_prints_full_entry() {
    let home = TempDir::new().unwrap();
    let history = write_history(&home, &[r"line one\nline two", "plain"]);

    clipstash(home.path())
        .args(["preview", "1", "--history-file"])
        .arg(&history)
        .assert()
        .success()
        .stdout("line one\nline two\n");
}

#[test]
fn test_select_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    let history = write_history(&home, &["c", "b", "a"]);

    clipstash(home.path())
        .args(["select", "5", "--history-file"])
        .arg(&history)
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    // Nothing was promoted or rewritten
    assert_eq!(fs::read_to_string(&history).unwrap(), "c\nb\na\n");
}

#[test]
fn test_select_zero_fails() {
    let home = TempDir::new().unwrap();
    let history = write_history(&home, &["only"]);

    clipstash(home.path())
        .args(["select", "0", "--history-file"])
        .arg(&history)
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_clear_empties_history_file() {
    let home = TempDir::new().unwrap();
    let history = write_history(&home, &["b", "a"]);

    clipstash(home.path())
        .args(["clear", "--history-file"])
        .arg(&history)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&history).unwrap(), "");

    clipstash(home.path())
        .args(["list", "--history-file"])
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("Clipboard history is empty"));
}

#[test]
fn test_legacy_history_file_is_readable() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("legacy");
    fs::write(
        &path,
        "newest\n---CLIPBOARD_ENTRY_SEPARATOR---\nolder\nwith two lines\n---CLIPBOARD_ENTRY_SEPARATOR---\n",
    )
    .unwrap();

    clipstash(home.path())
        .args(["preview", "2", "--history-file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("older\nwith two lines\n");
}

#[test]
fn test_monitor_rejects_write_only_backend() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[clipboard]\nbackend = \"osc52\"\n");

    clipstash(home.path())
        .arg("monitor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read the clipboard"));
}

#[test]
fn test_add_rejects_write_only_backend() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[clipboard]\nbackend = \"osc52\"\n");

    clipstash(home.path())
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read the clipboard"));
}

#[test]
fn test_config_history_file_is_used() {
    let home = TempDir::new().unwrap();
    let history = write_history(&home, &["configured"]);
    write_config(
        &home,
        &format!("[history]\nfile = \"{}\"\n", history.display()),
    );

    clipstash(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. configured"));
}
