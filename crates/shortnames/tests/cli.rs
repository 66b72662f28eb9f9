//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("SHORTNAMES_LOG_DIR"));
}

#[test]
fn no_arguments_prints_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Shorten Command
// =============================================================================

#[test]
fn shorten_reads_stdin() {
    cmd()
        .arg("shorten")
        .write_stdin("Ulica Świętego Marcina Kowalskiego\nAleja Rodziny Kowalskich\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Ul. Św. M. Kowalskiego\tKowalskiego\nAl. Kowalskich\tKowalskich\n",
        ));
}

#[test]
fn shorten_reads_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("names.txt");
    fs::write(&input, "Plac Zamkowy\r\nBaker Street\r\n").unwrap();

    cmd()
        .args(["shorten", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Pl. Zamkowy\tZamkowy\nBaker St\tBaker\n",
        ));
}

#[test]
fn shorten_name_arguments() {
    cmd()
        .args(["shorten", "--name", "Plac Zamkowy", "--name", "Ulica Jana Kowalskiego"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Pl. Zamkowy\tZamkowy\nUl. J. Kowalskiego\tKowalskiego\n",
        ));
}

#[test]
fn shorten_lines_format() {
    cmd()
        .args(["shorten", "--format", "lines", "--name", "Plac Zamkowy"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Pl. Zamkowy\nZamkowy\n"));
}

#[test]
fn shorten_json_output() {
    let output = cmd()
        .args(["shorten", "--json", "--name", "Plac Zamkowy"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Plac Zamkowy");
    assert_eq!(value["short"], "Pl. Zamkowy");
    assert_eq!(value["shortest"], "Zamkowy");
}

#[test]
fn shorten_reports_invalid_utf8_line() {
    cmd()
        .arg("shorten")
        .write_stdin(&b"Plac Zamkowy\n\xc3\x28\n"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn shorten_rejects_name_over_limit() {
    cmd()
        .args(["shorten", "--max-chars", "5", "--name", "Plac Zamkowy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit: 5"));
}

#[test]
fn shorten_unbounded_accepts_long_name() {
    let long = format!("Ulica {}", "a".repeat(600));
    cmd()
        .args(["shorten", "--unbounded", "--name", &long])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ul. aaaa"));
}

#[test]
fn shorten_max_chars_conflicts_with_unbounded() {
    cmd()
        .args(["shorten", "--max-chars", "5", "--unbounded", "--name", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn shorten_with_custom_dictionary() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("extra.toml"),
        "[[abbreviations]]\nphrase = \"rynek\"\nabbreviation = \"ryn.\"\n",
    )
    .unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "shorten",
            "--dictionary",
            "extra.toml",
            "--name",
            "Rynek Kościuszki",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("Ryn. Kościuszki\tKościuszki\n"));
}

#[test]
fn shorten_without_builtin_keeps_names() {
    cmd()
        .args(["shorten", "--no-builtin", "--name", "Plac Zamkowy"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Plac Zamkowy\tPlac Zamkowy\n"));
}

#[test]
fn shorten_missing_file_fails() {
    cmd()
        .args(["shorten", "/nonexistent/names.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Dict Command
// =============================================================================

#[test]
fn dict_shows_statistics() {
    cmd()
        .args(["dict", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Abbreviation rules"))
        .stdout(predicate::str::contains("Given names"));
}

#[test]
fn dict_json_statistics() {
    let output = cmd().args(["dict", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["abbreviations"].as_u64().unwrap() > 200);
    assert!(value["given_names"].as_u64().unwrap() > 300);
}

#[test]
fn dict_lookup_lists_rules() {
    cmd()
        .args(["dict", "--color", "never", "--lookup", "ulica"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ulica → ul."));
}

#[test]
fn dict_lookup_given_name() {
    let output = cmd()
        .args(["dict", "--json", "--lookup", "Jana"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["given_name"], true);
}

#[test]
fn dict_lookup_unknown_word() {
    cmd()
        .args(["dict", "--color", "never", "--lookup", "zamkowy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no rules"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .args(["info", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_is_valid() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], env!("CARGO_PKG_NAME"));
    assert!(value["config"].is_object());
}

#[test]
fn color_never_emits_no_escape_codes() {
    for args in [
        &["info", "--color", "never"][..],
        &["dict", "--color", "never"][..],
        &["dict", "--color", "never", "--lookup", "ulica"][..],
        &["dict", "--color", "never", "--lookup", "zamkowy"][..],
    ] {
        cmd()
            .env("CLICOLOR_FORCE", "1")
            .env("FORCE_COLOR", "1")
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
    }
}

#[test]
fn color_always_styles_output() {
    cmd()
        .args(["dict", "--color", "always", "--lookup", "ulica"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn chdir_to_missing_directory_fails() {
    cmd()
        .args(["-C", "/nonexistent/dir", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}

#[test]
fn quiet_flag_is_accepted() {
    cmd()
        .args(["-q", "shorten", "--name", "Plac Zamkowy"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Pl. Zamkowy\tZamkowy\n"));
}
