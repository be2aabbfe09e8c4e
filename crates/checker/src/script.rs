// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Composite script construction.
//!
//! Each test case is preceded by an `echo` of its label so the transcript
//! printed by the target can be read back test by test.

use crate::suite::TestSuite;

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;

/// Label echoed before test `number`.
pub fn label(number: usize) -> String {
    format!("$> Test {number}")
}

/// The full stdin payload for one run.
///
/// Holds one entry per logical line: a label line followed by the case text
/// for every test, so `entries().len() == 2 * suite.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    entries: Vec<String>,
}

impl Script {
    pub fn compose(suite: &TestSuite) -> Self {
        let mut entries = Vec::with_capacity(suite.len() * 2);
        for (number, case) in suite.numbered() {
            entries.push(format!("echo \"{}\"", label(number)));
            entries.push(case.to_string());
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Render as newline-terminated text, ready to write to stdin.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(entry);
            text.push('\n');
        }
        text
    }
}

/// Count logical lines in shell input, treating backslash-newline as a
/// continuation rather than a line break.
///
/// Heuristic: a line ending in an escaped backslash (`\\`) is also
/// counted as continued. Good enough for the scripts composed here.
pub fn logical_line_count(text: &str) -> usize {
    text.replace("\\\n", "").lines().count()
}
