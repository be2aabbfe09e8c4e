// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One smoke-test run against a target shell.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::Instrument;

use crate::config::CheckArgs;
use crate::exec::{run_script, RunError};
use crate::exit_error::ExitError;
use crate::script::{logical_line_count, Script};
use crate::suite::TestSuite;
use crate::verdict::Verdict;

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;

#[derive(Debug, Clone)]
pub struct Harness {
    executable: PathBuf,
    suite: TestSuite,
    timeout: Duration,
}

impl Harness {
    pub fn new(executable: impl Into<PathBuf>, suite: TestSuite, timeout: Duration) -> Self {
        Self {
            executable: executable.into(),
            suite,
            timeout,
        }
    }

    /// Build a harness for the smoke suite from parsed arguments.
    pub fn from_args(args: &CheckArgs, timeout: Duration) -> Self {
        tracing::debug!(
            results = ?args.results,
            without_checks = args.without_checks,
            max = args.max.points(),
            "grading options accepted",
        );
        Self::new(&args.executable, TestSuite::smoke(), timeout)
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn script(&self) -> Script {
        Script::compose(&self.suite)
    }

    /// Feed the composed script to the target and judge the result.
    pub async fn run(&self) -> Result<Verdict, RunError> {
        let script = self.script().render();
        let span = tracing::info_span!(
            "harness.run",
            executable = %self.executable().display(),
            cases = self.suite.len(),
            lines = logical_line_count(&script),
        );

        let outcome = run_script(&self.executable, &script, self.timeout)
            .instrument(span.clone())
            .await?;
        let verdict = Verdict::from_outcome(outcome);
        span.in_scope(|| tracing::info!(passed = verdict.passed(), "run finished"));
        Ok(verdict)
    }

    /// Run, write the transcript to `out` and map the verdict to an exit
    /// status.
    pub async fn check(&self, out: &mut impl Write) -> Result<(), ExitError> {
        let verdict = self.run().await?;
        write_transcript(out, &verdict.transcript())?;
        verdict.into_result()
    }
}

/// Write `text` and flush, so the transcript is visible before exit.
pub fn write_transcript(out: &mut impl Write, text: &str) -> Result<(), ExitError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| ExitError::new(crate::exit_error::ERROR_EXIT_CODE, format!("error: {e}")))
}
