// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Outcome of one scripted run of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The child exited and its output reached EOF before the deadline.
    Completed {
        /// Interleaved stdout and stderr, decoded lossily as UTF-8.
        output: String,
        /// Exit code; `-1` when the child was terminated by a signal.
        exit_code: i32,
    },
    /// The deadline fired first.
    TimedOut,
}
