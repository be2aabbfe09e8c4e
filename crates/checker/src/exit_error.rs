// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries the process exit status.
//!
//! The harness returns `ExitError` instead of calling `std::process::exit()`
//! directly, leaving process termination to `main()`.

use crate::exec::RunError;

/// Exit status for runs that never reached a verdict (spawn or I/O failure).
pub const ERROR_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<RunError> for ExitError {
    fn from(err: RunError) -> Self {
        Self::new(ERROR_EXIT_CODE, format!("error: {err}"))
    }
}
