//! End-to-end runs of the `multi-channel-select` binary.

use std::process::{Command, Output};

fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_multi-channel-select"))
        .args(args)
        .output()
        .expect("run binary")
}

fn value_lines(output: &Output) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| line.starts_with("source "))
        .map(str::to_owned)
        .collect();
    lines.sort();
    lines
}

#[test]
fn default_run_drains_three_sources() {
    let output = run_bin(&[]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        value_lines(&output),
        vec!["source 0: 0", "source 1: 1", "source 2: 2"]
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3, "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("all sources closed"), "{stderr}");
}

#[test]
fn blocking_backend_prints_the_same_values() {
    let async_run = run_bin(&["--backend", "async", "--sources", "8"]);
    let blocking_run = run_bin(&["--backend", "blocking", "--sources", "8"]);
    assert!(async_run.status.success());
    assert!(blocking_run.status.success());

    assert_eq!(value_lines(&async_run).len(), 8);
    assert_eq!(value_lines(&async_run), value_lines(&blocking_run));
}

#[test]
fn logs_stay_off_stdout() {
    let output = run_bin(&["-v"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().all(|line| line.starts_with("source ")), "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("source exhausted"), "{stderr}");
}

#[test]
fn zero_sources_fails() {
    let output = run_bin(&["--sources", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one source is required"), "{stderr}");
}
