//! Integration tests for the castscribe CLI

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, load_fixture, temp_fixture};

/// castscribe with config isolated to `config_home`
fn castscribe(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("castscribe").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG")
        .env_remove("CASTSCRIBE_LOG");
    cmd
}

// ============================================================================
// format (stdin)
// ============================================================================

#[test]
fn format_reads_stdin_and_prints_transcript() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .arg("format")
        .write_stdin(load_fixture("minimal.cast"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Terminal Session (fish shell, 80x24)\n"))
        .stdout(predicate::str::contains("COMMAND: ls -la\n"))
        .stdout(predicate::str::contains("OUTPUT: total 0\n"));
}

#[test]
fn no_command_defaults_to_format() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .write_stdin(load_fixture("minimal.cast"))
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMAND: ls -la\n"));
}

#[test]
fn format_csv_output() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .args(["format", "--output=csv"])
        .write_stdin(load_fixture("minimal.cast"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "shell,width,height,recorded,working_dir,command,start_time,duration,exit_code,output\n",
        ))
        .stdout(predicate::str::contains(",ls -la,0.100,0.200,0,total 0\n"));
}

#[test]
fn format_rejects_unknown_output_format() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .args(["format", "--output", "json"])
        .write_stdin(load_fixture("minimal.cast"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown output format: json"));
}

#[test]
fn format_empty_stdin_is_no_session_data() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .arg("format")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no session data found"));
}

#[test]
fn format_bad_header_fails() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .arg("format")
        .write_stdin(load_fixture("bad_header.cast"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("header parse failure"));
}

#[test]
fn configured_default_format_is_used() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("castscribe");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[output]\nformat = \"csv\"\n").unwrap();

    castscribe(home.path())
        .arg("format")
        .write_stdin(load_fixture("minimal.cast"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("shell,width,height"));
}

// ============================================================================
// file
// ============================================================================

#[test]
fn file_writes_default_output_next_to_input() {
    let home = TempDir::new().unwrap();
    let (dir, path) = temp_fixture("fish_session.cast");

    castscribe(home.path())
        .arg("file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatted output saved to:"));

    let output = dir.path().join("fish_session_formatted.md");
    let text = fs::read_to_string(output).unwrap();
    assert!(text.contains("COMMAND: cat missing.txt\n"));
    assert!(path.exists(), "input kept without --cleanup");
}

#[test]
fn file_csv_uses_csv_extension() {
    let home = TempDir::new().unwrap();
    let (dir, path) = temp_fixture("minimal.cast");

    castscribe(home.path())
        .arg("file")
        .arg(&path)
        .arg("--output=csv")
        .assert()
        .success();

    assert!(dir.path().join("minimal_formatted.csv").exists());
}

#[test]
fn file_with_explicit_output_and_cleanup() {
    let home = TempDir::new().unwrap();
    let (dir, path) = temp_fixture("minimal.cast");
    let output = dir.path().join("transcript.txt");

    castscribe(home.path())
        .arg("file")
        .arg(&path)
        .arg(&output)
        .arg("--cleanup")
        .assert()
        .success()
        .stdout(predicate::str::contains("removed."));

    assert!(output.exists());
    assert!(!path.exists(), "input removed with --cleanup");
}

#[test]
fn file_missing_input_fails() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .args(["file", "/nonexistent/missing.cast"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input file does not exist"))
        .stderr(predicate::str::contains("missing.cast"));
}

#[test]
fn file_requires_input_argument() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .arg("file")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<INPUT>"));
}

// ============================================================================
// record
// ============================================================================

#[cfg(unix)]
#[test]
fn record_runs_configured_recorder_then_converts() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let config_dir = home.path().join("castscribe");
    fs::create_dir_all(&config_dir).unwrap();

    // "Recording" is copying a fixture into place
    let fixture = fixtures_dir().join("minimal.cast");
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "[record]\nprogram = \"cp\"\nargs = [\"{}\"]\n",
            fixture.display()
        ),
    )
    .unwrap();

    castscribe(home.path())
        .current_dir(work.path())
        .args(["record", "demo", "--cleanup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recording will be saved to: demo.cast"))
        .stdout(predicate::str::contains("Formatted output saved to:"));

    let transcript = fs::read_to_string(work.path().join("demo_formatted.md")).unwrap();
    assert!(transcript.contains("COMMAND: ls -la"));
    assert!(!work.path().join("demo.cast").exists());
}

#[test]
fn record_rejects_unknown_format_before_recording() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .args(["record", "--output=xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown output format: xml"));
}

// ============================================================================
// misc
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[classifier]"))
        .stdout(predicate::str::contains("program = \"asciinema\""));
}

#[test]
fn config_init_writes_defaults_once() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("castscribe").join("config.toml");

    castscribe(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config:"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("likely_output_exclusions"));

    fs::write(&path, "[output]\nformat = \"csv\"\n").unwrap();
    castscribe(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists:"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[output]\nformat = \"csv\"\n"
    );
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    castscribe(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("record"))
        .stdout(predicate::str::contains("file"));
}
