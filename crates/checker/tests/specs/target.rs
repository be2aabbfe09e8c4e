// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict specs against real and fake target shells.
//!
//! Serialized: fake shells are written to disk and exec'd, and a
//! concurrent fork could otherwise hold them open for writing.

use crate::prelude::*;
use serial_test::serial;

const GRADING_OPTIONS: &[&[&str]] = &[
    &["-r", "results.txt"],
    &["-t"],
    &["--max", "20"],
    &["--max", "25", "-t", "-r", "out.txt"],
];

/// Smoke script as echoed back by `cat`, plus the trailing newline the
/// checker prints after the output.
fn echoed_smoke_script() -> String {
    let dry = checker().args(&["--dry-run"]).passes();
    format!("{}\n", dry.stdout)
}

#[test]
#[serial]
fn echoing_target_passes_and_prints_every_label_in_order() {
    let output = checker().args(&["-e", "/bin/cat"]).passes();

    let mut last = 0;
    for number in 1..=5 {
        let label = format!("$> Test {number}");
        let at = output.stdout[last..]
            .find(&label)
            .map(|i| i + last)
            .unwrap_or_else(|| unreachable!("{label} missing or out of order"));
        last = at + label.len();
    }
    output.stdout_eq(&echoed_smoke_script());
}

#[test]
#[serial]
fn repeated_runs_print_identical_output() {
    let first = checker().args(&["-e", "/bin/cat"]).passes();
    let second = checker().args(&["-e", "/bin/cat"]).passes();
    similar_asserts::assert_eq!(first.stdout, second.stdout);
}

#[test]
#[serial]
fn non_zero_exit_fails() {
    let sandbox = Sandbox::new();
    let shell = sandbox.shell("broken", "cat > /dev/null\nexit 7");

    checker()
        .args(&["-e", shell.to_str().unwrap()])
        .fails_with(FAILED)
        .stdout_eq("Expected zero exit code\n");
}

#[test]
#[serial]
fn immediate_exit_without_reading_input_fails() {
    checker()
        .args(&["-e", "/bin/false"])
        .fails_with(FAILED)
        .stdout_has("Expected zero exit code");
}

#[test]
#[serial]
fn target_ignoring_eof_times_out() {
    let sandbox = Sandbox::new();
    let pid_file = sandbox.path().join("pid");
    let shell = sandbox.shell(
        "stuck",
        &format!("echo $$ > {}\nexec sleep 30", pid_file.display()),
    );

    checker()
        .env("MICRO_CHECK_TIMEOUT_MS", "500")
        .env("MICRO_CHECK_LOG", "debug")
        .args(&["-e", shell.to_str().unwrap()])
        .fails_with(FAILED)
        .stdout_eq("Too long no output. Probably you forgot to process EOF\n")
        .stderr_has("target timed out")
        .stderr_has("target killed");

    let pid = std::fs::read_to_string(&pid_file).unwrap();
    let alive = std::process::Command::new("/bin/sh")
        .arg("-c")
        .arg(format!("kill -0 {}", pid.trim()))
        .status()
        .unwrap();
    assert!(!alive.success(), "target {} survived the checker", pid.trim());
}

#[test]
#[serial]
fn grading_options_do_not_change_a_pass() {
    let expected = echoed_smoke_script();
    for extra in GRADING_OPTIONS {
        let mut args = vec!["-e", "/bin/cat"];
        args.extend_from_slice(extra);
        checker().args(&args).passes().stdout_eq(&expected);
    }
}

#[test]
#[serial]
fn grading_options_do_not_change_a_failure() {
    for extra in GRADING_OPTIONS {
        let mut args = vec!["-e", "/bin/false"];
        args.extend_from_slice(extra);
        checker()
            .args(&args)
            .fails_with(FAILED)
            .stdout_eq("Expected zero exit code\n");
    }
}

#[test]
#[serial]
fn real_shell_runs_smoke_suite_in_working_directory() {
    let sandbox = Sandbox::new();
    checker()
        .current_dir(sandbox.path())
        .args(&["-e", "/bin/sh"])
        .passes()
        .stdout_has("$> Test 1\n1\n")
        .stdout_has("$> Test 5\nnext thing\n");

    // The printf case leaves the generated program behind.
    let program = std::fs::read_to_string(sandbox.path().join("test.py")).unwrap();
    assert!(program.starts_with("import time\ntime.sleep(0.1)\n"));
}

#[test]
#[serial]
fn debug_logging_goes_to_stderr() {
    checker()
        .env("MICRO_CHECK_LOG", "debug")
        .args(&["-e", "/bin/cat"])
        .passes()
        .stdout_eq(&echoed_smoke_script())
        .stderr_has("target exited");
}
