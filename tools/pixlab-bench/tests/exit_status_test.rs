//! Exit-status contract of the harness binary
//!
//! The process exits 0 whether or not the experiment succeeds; failures
//! are reported on stderr only.

use std::process::Command;

fn run_bench(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pixlab-bench"))
        .args(args)
        .output()
        .expect("harness binary runs")
}

#[test]
fn test_failing_experiment_still_exits_zero() {
    // vecadd rejects a zero length, so the experiment fails
    let output = run_bench(&["vecadd", "0"]);
    assert!(output.status.success());
    assert!(
        !output.stderr.is_empty(),
        "failure should be reported on stderr"
    );
}

#[test]
fn test_bad_argument_still_exits_zero() {
    let output = run_bench(&["dct", "--size", "nonsense"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("size must be WxH"), "stderr: {}", stderr);
}

#[test]
fn test_passing_experiment_exits_zero_quietly() {
    let output = run_bench(&["grid"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "no errors expected on stderr");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("passed"), "stdout: {}", stdout);
}
