//! Runs the `cxxscan` binary end to end.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn cxxscan(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cxxscan"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cxxscan");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for cxxscan")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn scans_stdin() {
    let source = "void f(int n) {\n    for (auto& item : items) {\n        use(item);\n    }\n}\n";
    let output = cxxscan(&["--sort"], source);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "2\tauto& item = items.begin()\n1\tint n\n"
    );
}

#[test]
fn lists_arguments() {
    let output = cxxscan(&["--args"], "(const char* text, int)");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\tconst char* text\n1\tint\n");
}

#[test]
fn ignores_macros() {
    let output = cxxscan(&["--macro=EXPORT"], "EXPORT int value;");
    assert_eq!(stdout(&output), "1\tint value\n");
}

#[test]
fn prints_json() {
    let output = cxxscan(&["--json"], "double ratio = 0.5;");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["path"], "<stdin>");
    assert_eq!(json[0]["variables"][0]["name"], "ratio");
    assert_eq!(json[0]["variables"][0]["default_value"], "0.5");
}

#[test]
fn help_exits_cleanly() {
    let output = cxxscan(&["--help"], "");
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Usage: cxxscan"));
}

#[test]
fn usage_error_exits_with_two() {
    let output = cxxscan(&["--bogus"], "");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown option `--bogus`"));
}

#[test]
fn missing_file_exits_with_one() {
    let output = cxxscan(&["/nonexistent/cxxscan/input.cpp"], "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn dash_reads_stdin_alongside_files() {
    let path = std::env::temp_dir().join(format!("cxxscan-cli-{}.cpp", std::process::id()));
    std::fs::write(&path, "int from_file;\n").unwrap();
    let file = path.to_str().unwrap();
    let output = cxxscan(&[file, "-"], "int from_stdin;\n");
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("==> {file} <==\n1\tint from_file\n\n==> <stdin> <==\n1\tint from_stdin\n")
    );
}
