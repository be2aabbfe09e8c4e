// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pass/fail decision for a run.
//!
//! The verdict depends only on the exit code and on whether the deadline
//! fired. Scoring options never feed into it.

use crate::exec::RunOutcome;
use crate::exit_error::ExitError;

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;

/// Exit status used for every failed run.
pub const FAILURE_EXIT_CODE: i32 = -1;

pub const TIMEOUT_MESSAGE: &str = "Too long no output. Probably you forgot to process EOF";
pub const NON_ZERO_EXIT_MESSAGE: &str = "Expected zero exit code";

/// Why a run failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Timeout,
    NonZeroExit { exit_code: i32, output: String },
}

impl Failure {
    pub fn message(&self) -> &'static str {
        match self {
            Failure::Timeout => TIMEOUT_MESSAGE,
            Failure::NonZeroExit { .. } => NON_ZERO_EXIT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass { output: String },
    Fail(Failure),
}

impl Verdict {
    pub fn from_outcome(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::TimedOut => Verdict::Fail(Failure::Timeout),
            RunOutcome::Completed { output, exit_code: 0 } => Verdict::Pass { output },
            RunOutcome::Completed { output, exit_code } => {
                Verdict::Fail(Failure::NonZeroExit { exit_code, output })
            }
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass { .. })
    }

    /// Text printed to stdout for this verdict.
    ///
    /// A pass prints the captured output followed by a newline; a failure
    /// prints its diagnostic only.
    pub fn transcript(&self) -> String {
        match self {
            Verdict::Pass { output } => format!("{output}\n"),
            Verdict::Fail(failure) => format!("{}\n", failure.message()),
        }
    }

    /// Map to the process result: `Ok` on pass, an [`ExitError`] carrying
    /// [`FAILURE_EXIT_CODE`] otherwise.
    pub fn into_result(self) -> Result<(), ExitError> {
        match self {
            Verdict::Pass { .. } => Ok(()),
            Verdict::Fail(failure) => Err(ExitError::new(FAILURE_EXIT_CODE, failure.message())),
        }
    }
}
