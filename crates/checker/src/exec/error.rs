// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use std::path::PathBuf;

/// Errors that abort a run before a verdict can be reached.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Executable not found or could not be spawned.
    #[error("failed to spawn `{}`: {source}", executable.display())]
    SpawnFailed {
        executable: PathBuf,
        source: std::io::Error,
    },

    /// The merged stdout/stderr pipe could not be created.
    #[error("failed to set up output pipe: {0}")]
    Pipe(#[source] std::io::Error),

    /// Writing the script to the child's stdin failed.
    #[error("failed to write script to stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Reading the child's output failed.
    #[error("failed to read output: {0}")]
    Output(#[source] std::io::Error),

    /// Waiting for the child to exit failed.
    #[error("failed to wait for `{}`: {source}", executable.display())]
    Wait {
        executable: PathBuf,
        source: std::io::Error,
    },
}
