//! End-to-end tests for the `thale` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn thale(args: &[&str], file: Option<&Path>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_thale"));
    command.args(args).env("NO_COLOR", "1").env_remove("THALE_LOG");
    if let Some(file) = file {
        command.arg(file);
    }
    command.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_prints_token_codes() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "main.thl", "let x = 42 + 3.14 -- done\n");

    let output = thale(&["--color", "never"], Some(path.as_path()));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Token: 37\nToken: 27\nToken: 18\nToken: 28\nToken: 13\nToken: 29\n"
    );
}

#[test]
fn test_detailed_format() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "pair.thl", "x ::\n  xs");

    let output = thale(&["--format", "detailed", "--color", "never"], Some(path.as_path()));
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1:1\tIdentifier\tx\n1:3\tConsOp\t::\n2:3\tIdentifier\txs\n"
    );
}

#[test]
fn test_unterminated_string_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "bad.thl", "let s = \"abc\nlet t = 1\n");

    let output = thale(&["--color", "never"], Some(path.as_path()));
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Token: 37\nToken: 27\nToken: 18\n");
    assert_eq!(
        stderr(&output),
        "LexicalError: [line 1, column 9] Unterminated string literal\n\
         \x20   1 | let s = \"abc\n\
         \x20     |         ^\n"
    );
}

#[test]
fn test_unknown_symbol_points_at_column() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "sym.thl", "let x = 1\nx $ 2\n");

    let output = thale(&["--color", "never"], Some(path.as_path()));
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("LexicalError: [line 2, column 3] Unknown symbol '$'"));
    assert!(err.contains("    2 | x $ 2\n"));
    assert!(err.contains("      |   ^\n"));
}

#[test]
fn test_invalid_escape_keeps_scanning() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "esc.thl", "\"a\\x\" 1");

    let output = thale(&["--color", "never"], Some(path.as_path()));
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Token: 30\nToken: 28\n");
    assert!(stderr(&output).contains("Invalid escape sequence"));
}

#[test]
fn test_invalid_escape_reported_before_fatal_error() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "esc_eof.thl", "\"a\\x");

    let output = thale(&["--color", "never"], Some(path.as_path()));
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    let err = stderr(&output);
    let escape = err.find("Invalid escape sequence").expect("escape diagnostic missing");
    let fatal = err.find("Unterminated string literal").expect("fatal diagnostic missing");
    assert!(escape < fatal);
}

#[test]
fn test_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "main.txt", "let x = 1");

    let output = thale(&[], Some(path.as_path()));
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("thale: error: expected a .thl source file"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.thl");

    let output = thale(&[], Some(path.as_path()));
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("could not read file"));
}

#[test]
fn test_version_flags() {
    for flag in ["-v", "--version"] {
        let output = thale(&[flag], None);
        assert!(output.status.success());
        assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_help_flag() {
    let output = thale(&["-h"], None);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: thale"));
}
