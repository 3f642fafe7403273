//! End-to-end tests for the `lox` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn lox() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lox"))
}

fn run_script(source: &str, args: &[&str]) -> Output {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();

    lox().args(args).arg(file.path()).output().unwrap()
}

#[test]
fn test_script_prints_tokens() {
    let output = run_script("var x = 1.5;", &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "VAR var nil\nIDENTIFIER x nil\nEQUAL = nil\nNUMBER 1.5 1.5\nSEMICOLON ; nil\nEOF  nil\n"
    );
}

#[test]
fn test_script_with_error_exits_65() {
    let output = run_script("print @;", &[]);
    assert_eq!(output.status.code(), Some(65));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, "[line 1] Error : Unexpected character: '@'.\n");

    // Scanning still finished.
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("EOF  nil\n"));
}

#[test]
fn test_quiet_suppresses_tokens() {
    let output = run_script("1 + 2", &["--quiet"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_pretty_reports_still_fail() {
    let output = run_script("\"open", &["--pretty", "--quiet"]);
    assert_eq!(output.status.code(), Some(65));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unterminated string."));
}

#[test]
fn test_missing_script_exits_74() {
    let output = lox().arg("/definitely/not/here.lox").output().unwrap();
    assert_eq!(output.status.code(), Some(74));
}

#[test]
fn test_bad_usage_exits_64() {
    let output = lox().arg("--no-such-flag").output().unwrap();
    assert_eq!(output.status.code(), Some(64));
}

fn run_prompt(input: &[u8], args: &[&str]) -> Output {
    let mut child = lox()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_prompt_keeps_scanning_after_bad_line() {
    let output = run_prompt(b"@\nand\n", &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("AND and nil"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Unexpected character").count(), 1);
}

#[test]
fn test_prompt_resets_errors_between_lines() {
    let output = run_prompt(b"@\nand\n", &["--verbose"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("with errors").count(), 1);
    assert!(stdout.contains("scanned 2 token(s), ok"));
}

#[test]
fn test_verbose_script_summary() {
    let output = run_script("1 + 2", &["--verbose"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("scanned 4 token(s), ok"));
}
