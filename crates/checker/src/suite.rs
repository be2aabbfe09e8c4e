// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test cases fed to the shell under test.

use std::fmt;

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;

/// A single shell command (or short command sequence) sent to the target.
///
/// The text is sent verbatim. It may span several physical lines joined by
/// backslash-newline continuations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase(String);

impl TestCase {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    pub fn command(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, immutable list of test cases. Numbering starts at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(cases: impl IntoIterator<Item = TestCase>) -> Self {
        Self {
            cases: cases.into_iter().collect(),
        }
    }

    /// The built-in smoke suite.
    ///
    /// Exercises plain `echo`, a multi-line `printf` redirected into a file,
    /// a pipe into the `exit` builtin, and reading back the file written by
    /// the child program.
    pub fn smoke() -> Self {
        Self::new(
            [
                "echo 1",
                concat!(
                    "printf \"import time\\n\\\n",
                    "time.sleep(0.1)\\n\\\n",
                    "f = open('test.txt', 'w')\\n\\\n",
                    "f.write('Text\\\\\\n')\\n\\\n",
                    "f.close()\\n\" > test.py",
                ),
                "python test.py | exit 0",
                "cat test.txt",
                "echo next thing",
            ]
            .map(TestCase::new),
        )
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate cases paired with their 1-based test number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &TestCase)> {
        self.cases.iter().enumerate().map(|(i, case)| (i + 1, case))
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::smoke()
    }
}
