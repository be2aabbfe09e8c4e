// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument handling specs.

use crate::prelude::*;

#[test]
fn help_lists_all_options() {
    checker()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("-e <PATH>")
        .stdout_has("-r <PATH>")
        .stdout_has("-t")
        .stdout_has("--max <MAX>")
        .stdout_has("--dry-run");
}

#[test]
fn max_outside_allowed_set_is_a_usage_error() {
    checker()
        .args(&["--max", "16"])
        .fails_with(2)
        .stderr_has("invalid value '16'");
}

#[test]
fn dry_run_prints_script_without_launching() {
    let output = checker()
        .args(&["-e", "./definitely-missing", "--dry-run"])
        .passes()
        .stdout_has("echo \"$> Test 1\"\necho 1\n")
        .stdout_has("echo \"$> Test 5\"\necho next thing\n");
    assert_eq!(output.stdout.matches("$> Test").count(), 5);
}

#[test]
fn missing_executable_is_reported() {
    checker()
        .args(&["-e", "./definitely-missing"])
        .fails_with(1)
        .stderr_has("failed to spawn `./definitely-missing`");
}
