//! Runs the `oil` binary end to end.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;

fn oil() -> Command {
    Command::new(env!("CARGO_BIN_EXE_oil"))
}

#[test]
fn runs_a_program_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.oil");
    fs::write(&path, "4\n2\n72\n3\n").unwrap();

    let output = oil().arg(&path).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "72");
}

#[test]
fn reads_input_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("echo.oil");
    fs::write(&path, "5\n9\n4\n9\n11\n3\n").unwrap();

    let mut child = oil()
        .arg(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"ping\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ping\n");
}

#[test]
fn debug_flag_strips_comments_and_traces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.oil");
    fs::write(&path, "4 # output\n2\n72 # the value\n3 # quit\n").unwrap();

    let output = oil().arg(&path).arg("debug").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("pointer: 0"));
    assert!(stdout.contains("72"));
}

#[test]
fn without_arguments_lists_opcodes() {
    let output = oil().output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("0: nop\n1: copy\n"));
    assert!(stdout.ends_with("17: chr_implode\n"));
}

#[test]
fn missing_file_fails() {
    let output = oil().arg("/nonexistent/prog.oil").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot find file"));
}
