// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Smoke-test harness for student-built shells.
//!
//! Feeds a numbered script of shell commands to a candidate shell over
//! stdin, captures its merged stdout/stderr and checks that it exits with
//! status zero before a deadline.

pub mod color;
pub mod config;
pub mod env;
pub mod exec;
pub mod exit_error;
pub mod harness;
pub mod script;
pub mod suite;
pub mod verdict;

pub use config::{CheckArgs, MaxScore};
pub use exec::{run_script, RunError, RunOutcome};
pub use exit_error::ExitError;
pub use harness::Harness;
pub use script::Script;
pub use suite::{TestCase, TestSuite};
pub use verdict::{Failure, Verdict};
